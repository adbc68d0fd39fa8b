//! Error handling for the Farm Assistant
//!
//! Every error can be shown to the farmer in English or Hindi.

use serde::Serialize;
use shared::{CropValidationError, Language};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] CropValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// User-facing error detail
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
}

impl AppError {
    pub fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Validation(err) => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: format!("Error: {}", err),
                message_hi: format!("त्रुटि: {}", err),
            },
            AppError::Storage(msg) => ErrorDetail {
                code: "STORAGE_ERROR".to_string(),
                message_en: format!("Storage error: {}", msg),
                message_hi: format!("भंडारण में त्रुटि: {}", msg),
            },
            AppError::Serialization(_) => ErrorDetail {
                code: "SERIALIZATION_ERROR".to_string(),
                message_en: "Saved data could not be read".to_string(),
                message_hi: "सहेजा गया डेटा पढ़ा नहीं जा सका".to_string(),
            },
            AppError::Io(_) => ErrorDetail {
                code: "IO_ERROR".to_string(),
                message_en: "Could not access local storage".to_string(),
                message_hi: "स्थानीय भंडारण तक पहुंच नहीं हो सकी".to_string(),
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message_en: format!("Configuration error: {}", msg),
                message_hi: format!("सेटिंग में त्रुटि: {}", msg),
            },
            AppError::Internal(msg) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: msg.clone(),
                message_hi: "आंतरिक त्रुटि".to_string(),
            },
        }
    }

    /// Message in the requested language
    pub fn message(&self, language: Language) -> String {
        let detail = self.detail();
        match language {
            Language::English => detail.message_en,
            Language::Hindi => detail.message_hi,
        }
    }
}

/// Result type alias for fallible operations
pub type AppResult<T> = Result<T, AppError>;
