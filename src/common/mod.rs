// Common module - shared types and utilities across all modules

pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::GreetingError;
pub use helpers::is_palindrome;
pub use validation::{ValidationResult, Validator};
