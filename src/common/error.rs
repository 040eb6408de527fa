// Error handling types for the greeting helpers

use thiserror::Error;

/// Greeting error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    #[error("the name argument must be a string")]
    TypeMismatch,

    #[error("the name argument cannot be blank")]
    BlankInput,

    #[error("the callback argument must be a function")]
    NotCallable,

    #[error("a delayed callback requires a running Tokio runtime")]
    RuntimeUnavailable,
}

impl GreetingError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            GreetingError::TypeMismatch => "TYPE_MISMATCH",
            GreetingError::BlankInput => "BLANK_INPUT",
            GreetingError::NotCallable => "NOT_CALLABLE",
            GreetingError::RuntimeUnavailable => "RUNTIME_UNAVAILABLE",
        }
    }
}
