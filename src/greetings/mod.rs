// Greetings module - name validation and the adapters that report its outcome

pub mod adapters;
pub mod models;
pub mod validators;


pub use adapters::{greet, greet_promise, Delivery, GreetCallback};
pub use models::NameCandidate;
pub use validators::{build_greeting, NameValidator};
