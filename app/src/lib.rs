//! Farm Assistant - application core
//!
//! Bilingual (English/Hindi) assistant for farmers: tab navigation, crop
//! record keeping, weather and yield predictions, and a scripted chat helper.
//! State lives in [`AppState`]; display work goes through [`render::RenderTarget`].

pub mod command;
pub mod config;
pub mod error;
pub mod external;
pub mod render;
pub mod services;
pub mod state;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
