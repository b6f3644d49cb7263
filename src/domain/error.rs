//! Compute request error taxonomy.
//!
//! Two terminal outcomes for a single request: the client sent
//! nothing, or the computation itself failed. Neither is retried and
//! neither escapes the request boundary - the HTTP adapter maps each
//! variant to a status code and a structured error body.

use thiserror::Error;

/// Failure of one compute request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// Client supplied an empty body. Mapped to 400.
    #[error("Input text is required")]
    EmptyInput,

    /// The computation failed unexpectedly. Mapped to 500.
    #[error("{message}")]
    Failed {
        /// Human-readable failure description, returned to the caller.
        message: String,
    },
}

impl ComputeError {
    /// Wrap an arbitrary failure message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_message_is_fixed() {
        assert_eq!(ComputeError::EmptyInput.to_string(), "Input text is required");
    }

    #[test]
    fn failed_carries_message() {
        let err = ComputeError::failed("digest backend unavailable");
        assert_eq!(err.to_string(), "digest backend unavailable");
    }
}
