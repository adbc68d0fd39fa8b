//! Validation utilities for the Farm Assistant

use thiserror::Error;
use validator::Validate;

use crate::models::{CropInput, RequiredField};

/// Crop form submitted without one or more required fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields")]
pub struct CropValidationError {
    /// Missing fields in form order
    pub missing: Vec<RequiredField>,
}

/// Validate crop form input
///
/// Only presence is checked: a single space is a valid crop type, matching
/// the form's own behavior.
pub fn validate_crop_input(input: &CropInput) -> Result<(), CropValidationError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let failed: Vec<RequiredField> = errors
        .field_errors()
        .keys()
        .filter_map(|key| RequiredField::from_error_key(key))
        .collect();
    let missing = RequiredField::ALL
        .into_iter()
        .filter(|field| failed.contains(field))
        .collect();

    Err(CropValidationError { missing })
}
