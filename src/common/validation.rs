// Common validation types and traits

use super::error::GreetingError;

/// Outcome of a validation: the produced value or the reason it was rejected
pub type ValidationResult<T> = Result<T, GreetingError>;

pub trait Validator<T> {
    type Output;

    fn validate(&self, data: &T) -> ValidationResult<Self::Output>;
}
