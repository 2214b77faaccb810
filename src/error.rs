use thiserror::Error;

/// Errors raised when user input to a menu or dialog is rejected.
///
/// None of these are fatal: the caller logs them and the previous
/// setting stays in effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not a whole number: {0:?}")]
    NotANumber(String),

    #[error("value must be a positive integer, got {0}")]
    NonPositive(i64),

    #[error("value {0} is out of range")]
    OutOfRange(i64),

    #[error("unknown tool: {0:?}")]
    UnknownTool(String),
}
