// src/services/mod.rs
//
// Services that talk to external collaborators

pub mod holidays;

// Re-export commonly used types for convenience
pub use holidays::{HolidayClient, HolidayConfig, HolidayError, HolidayRecord};
