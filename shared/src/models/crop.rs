//! Crop record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A crop record entered through the crop form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropRecord {
    /// Unique, strictly increasing within a store (milliseconds since epoch)
    pub id: i64,
    pub crop_type: String,
    pub planting_date: String,
    pub field_size: String,
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub irrigation_type: String,
    #[serde(default)]
    pub fertilizer: String,
    #[serde(default)]
    pub notes: String,
    pub date_added: DateTime<Utc>,
}

impl CropRecord {
    /// Build a record from already validated input
    pub fn from_input(id: i64, input: CropInput, date_added: DateTime<Utc>) -> Self {
        Self {
            id,
            crop_type: input.crop_type,
            planting_date: input.planting_date,
            field_size: input.field_size,
            soil_type: input.soil_type.unwrap_or_default(),
            irrigation_type: input.irrigation_type.unwrap_or_default(),
            fertilizer: input.fertilizer.unwrap_or_default(),
            notes: input.notes.unwrap_or_default(),
            date_added,
        }
    }
}

/// Raw crop form input
///
/// The three required fields are plain strings so an untouched form field
/// (empty string) is representable; optional fields are `None` when blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CropInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Crop type is required"))]
    pub crop_type: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Planting date is required"))]
    pub planting_date: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Field size is required"))]
    pub field_size: String,

    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub irrigation_type: Option<String>,
    #[serde(default)]
    pub fertilizer: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CropInput {
    pub fn new(
        crop_type: impl Into<String>,
        planting_date: impl Into<String>,
        field_size: impl Into<String>,
    ) -> Self {
        Self {
            crop_type: crop_type.into(),
            planting_date: planting_date.into(),
            field_size: field_size.into(),
            ..Default::default()
        }
    }

    /// Set a field by its form name (`crop-type`, `plantingDate`, `soil_type`, ...).
    /// Returns false for unknown names.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());
        match normalize_field_name(name).as_str() {
            "croptype" => self.crop_type = value.to_string(),
            "plantingdate" => self.planting_date = value.to_string(),
            "fieldsize" => self.field_size = value.to_string(),
            "soiltype" => self.soil_type = optional(value),
            "irrigationtype" => self.irrigation_type = optional(value),
            "fertilizer" => self.fertilizer = optional(value),
            "notes" => self.notes = optional(value),
            _ => return false,
        }
        true
    }
}

fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A field the crop form cannot be submitted without
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    CropType,
    PlantingDate,
    FieldSize,
}

impl RequiredField {
    pub const ALL: [RequiredField; 3] = [
        RequiredField::CropType,
        RequiredField::PlantingDate,
        RequiredField::FieldSize,
    ];

    /// Translation key of the field label
    pub fn label_key(&self) -> &'static str {
        match self {
            RequiredField::CropType => "crop.cropType",
            RequiredField::PlantingDate => "crop.plantingDate",
            RequiredField::FieldSize => "crop.fieldSize",
        }
    }

    /// Match a validator error key (either snake_case or camelCase)
    pub fn from_error_key(key: &str) -> Option<Self> {
        match key {
            "crop_type" | "cropType" => Some(RequiredField::CropType),
            "planting_date" | "plantingDate" => Some(RequiredField::PlantingDate),
            "field_size" | "fieldSize" => Some(RequiredField::FieldSize),
            _ => None,
        }
    }
}
