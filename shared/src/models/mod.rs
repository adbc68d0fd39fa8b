//! Domain models for the Farm Assistant

mod chat;
mod crop;
mod prediction;
mod weather;

pub use chat::*;
pub use crop::*;
pub use prediction::*;
pub use weather::*;
