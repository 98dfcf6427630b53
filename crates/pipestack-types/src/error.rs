//! Typed error taxonomy for pipe construction.
//!
//! All of these are local, synchronous, pre-deployment validation failures.
//! There is no retry or recovery path: an invalid configuration aborts
//! template construction and surfaces to the caller immediately.

use thiserror::Error;

/// Errors raised while wiring a pipe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipeError {
    /// `build()` was called before both a source and a target were set.
    #[error("pipe '{pipe}' is missing a {missing}; a pipe needs both a source and a target")]
    IncompleteConfiguration {
        pipe: String,
        missing: &'static str,
    },

    /// A step parameter is outside its permitted range.
    #[error("invalid {parameter} for pipe '{pipe}': {reason}")]
    InvalidParameter {
        pipe: String,
        parameter: &'static str,
        reason: String,
    },
}

/// Errors raised when parsing a literal ARN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArnError {
    /// The string does not start with `arn:`.
    #[error("'{0}' is not an ARN (expected 'arn:' prefix)")]
    MissingPrefix(String),

    /// The string has fewer than the six `:`-separated ARN components.
    #[error("malformed ARN '{0}': expected arn:partition:service:region:account:resource")]
    MalformedComponents(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_configuration_names_the_missing_step() {
        let err = PipeError::IncompleteConfiguration {
            pipe: "EventPipe".into(),
            missing: "source",
        };
        let msg = err.to_string();
        assert!(msg.contains("EventPipe"), "got: {msg}");
        assert!(msg.contains("missing a source"), "got: {msg}");
    }

    #[test]
    fn invalid_parameter_displays_reason() {
        let err = PipeError::InvalidParameter {
            pipe: "EventPipe".into(),
            parameter: "batch_size",
            reason: "must be at least 1, got 0".into(),
        };
        assert!(err.to_string().contains("batch_size"));
        assert!(err.to_string().contains("got 0"));
    }
}
