//! Shared types and models for the Farm Assistant
//!
//! This crate holds the pure, I/O-free parts of the assistant: domain models,
//! the bilingual dictionaries, the chat keyword rules and input validation.
//! It is used by the application crate and, through WASM, by the browser.

pub mod chat_rules;
pub mod clock;
pub mod models;
pub mod translations;
pub mod types;
pub mod validation;

pub use chat_rules::*;
pub use clock::*;
pub use models::*;
pub use types::*;
pub use validation::*;
