//! Error types for the simulation core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis, encoding or processing.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Scenario id not present in the catalog.
    #[error("unknown scenario: {id}")]
    UnknownScenario {
        /// The id that was looked up.
        id: String,
    },

    /// A WAV file cannot be encoded from an empty buffer.
    #[error("cannot encode an empty sample buffer")]
    EmptyBuffer,

    /// The effect chain cannot run on the given audio. Callers recover
    /// by passing the input through unmodified and flagging degraded mode.
    #[error("effect chain unavailable: {reason}")]
    EffectChainUnavailable {
        /// Why the chain could not be built.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an effect-chain-unavailable error.
    pub fn chain_unavailable(reason: impl Into<String>) -> Self {
        Self::EffectChainUnavailable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("duration", "must be positive");
        assert!(err.to_string().contains("duration"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_unknown_scenario_message() {
        let err = AudioError::UnknownScenario {
            id: "no_existe".to_string(),
        };
        assert!(err.to_string().contains("no_existe"));
    }
}
