//! Error types for sew.

use thiserror::Error;

/// Failure of a single action's operands.
///
/// Encoders return this; the dispatcher wraps it into
/// [`SewError::MalformedExpression`] together with the action's usage text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Wrong number of operands for the action.
    #[error("expected {expected} operand(s), got {got}")]
    InvalidOperandCount { expected: usize, got: usize },

    /// Operand is not an integer, or is outside the allowed range.
    #[error("invalid {reason} '{literal}'")]
    InvalidNumericLiteral {
        literal: String,
        reason: &'static str,
    },

    /// Operand is neither a MAC keyword nor six colon-separated hex octets.
    #[error("unknown address '{0}'")]
    InvalidMacLiteral(String),
}

impl EncodeError {
    pub(crate) fn numeric(literal: &str, reason: &'static str) -> Self {
        Self::InvalidNumericLiteral {
            literal: literal.to_string(),
            reason,
        }
    }
}

/// Main error type for a composition run.
#[derive(Debug, Error)]
pub enum SewError {
    /// Head token of a group names no registered action.
    #[error("unknown action '{name}' in '{group}'")]
    UnknownAction { name: String, group: String },

    /// The action exists but rejected its operands.
    #[error("{action}: {source} in '{group}'\nusage: {usage}")]
    MalformedExpression {
        action: String,
        usage: &'static str,
        group: String,
        #[source]
        source: EncodeError,
    },

    /// Writing the composed bytes failed.
    #[error("unable to write packet: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias using SewError.
pub type Result<T> = std::result::Result<T, SewError>;
