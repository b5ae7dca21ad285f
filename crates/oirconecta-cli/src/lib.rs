//! OirConecta CLI library.
//!
//! This crate provides the command implementations for the OirConecta
//! CLI: offline asset generation, scenario simulation, and catalog and
//! profile listings.

pub mod commands;
