// src/greetings/validators.rs

use super::models::NameCandidate;
use crate::common::{GreetingError, ValidationResult, Validator};

// ============================================================================
// Name Validator
// ============================================================================

pub struct NameValidator;

impl Validator<NameCandidate> for NameValidator {
    type Output = String;

    fn validate(&self, data: &NameCandidate) -> ValidationResult<String> {
        let name = data.as_text().ok_or(GreetingError::TypeMismatch)?.trim();

        if name.is_empty() {
            return Err(GreetingError::BlankInput);
        }

        Ok(format!("Hello, {}!", name))
    }
}

/// Validates the name and builds its greeting.
///
/// Pure and synchronous; the adapters decide how the outcome is reported.
pub fn build_greeting(name: &NameCandidate) -> ValidationResult<String> {
    NameValidator.validate(name)
}
