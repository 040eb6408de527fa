// src/lib.rs
//! Small helpers: a palindrome test, a greeting builder exposed through
//! callback and future adapters, and a public-holiday lookup.

// ============================================================================
// MODULE IMPORTS
// ============================================================================

pub mod common;
pub mod greetings;
pub mod services;

// ============================================================================
// PUBLIC SURFACE
// ============================================================================

pub use common::helpers::is_palindrome;
pub use common::GreetingError;
pub use greetings::adapters::{greet, greet_promise, Delivery, GreetCallback};
pub use greetings::models::NameCandidate;
pub use greetings::validators::{build_greeting, NameValidator};
pub use services::holidays::{holiday, HolidayClient, HolidayConfig, HolidayError, HolidayRecord};
