//! Hearing-loss effect chain: lowpass filter, dynamics compression,
//! distortion and output gain, keyed by severity profile.

mod chain;
pub mod dynamics;

pub use chain::{
    apply_profile, apply_profile_or_passthrough, build_live_chain, Processed, StageDescriptor,
};
