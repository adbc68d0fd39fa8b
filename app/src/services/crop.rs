//! Crop record store mirrored to key-value storage

use chrono::{DateTime, Utc};
use shared::{validate_crop_input, CropInput, CropRecord};

use crate::error::AppResult;
use crate::storage::{SharedStore, CROP_DATA_KEY};

/// Ordered crop records, persisted as a whole under `cropData`
#[derive(Clone)]
pub struct CropRecordStore {
    records: Vec<CropRecord>,
    storage: SharedStore,
}

impl CropRecordStore {
    /// Empty store; call [`load`](Self::load) to read persisted records
    pub fn new(storage: SharedStore) -> Self {
        Self {
            records: Vec::new(),
            storage,
        }
    }

    /// Replace in-memory records with the persisted sequence.
    /// Unreadable data is logged and leaves the store empty.
    pub fn load(&mut self) -> usize {
        self.records = match self.storage.get(CROP_DATA_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::error!("Error loading saved crop data: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!("Error reading crop data from storage: {}", e);
                Vec::new()
            }
        };
        tracing::debug!("Loaded {} crop records", self.records.len());
        self.records.len()
    }

    pub fn records(&self) -> &[CropRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and append a record stamped with the current time
    pub fn submit(&mut self, input: CropInput) -> AppResult<CropRecord> {
        self.submit_at(input, Utc::now())
    }

    /// Validate and append a record stamped with `now`
    pub fn submit_at(&mut self, input: CropInput, now: DateTime<Utc>) -> AppResult<CropRecord> {
        validate_crop_input(&input)?;

        let record = CropRecord::from_input(self.next_id(now), input, now);
        self.records.push(record.clone());
        tracing::info!("Added crop record {} ({})", record.id, record.crop_type);

        if let Err(e) = self.persist() {
            tracing::error!("Could not persist crop data: {}", e);
        }
        Ok(record)
    }

    /// Remove every record
    pub fn clear(&mut self) -> AppResult<()> {
        self.records.clear();
        self.persist()
    }

    /// Time-based id, bumped past the last id when the clock has not advanced
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis();
        match self.records.iter().map(|r| r.id).max() {
            Some(last) if last >= millis => last + 1,
            _ => millis,
        }
    }

    fn persist(&self) -> AppResult<()> {
        let json = serde_json::to_string(&self.records)?;
        self.storage.set(CROP_DATA_KEY, &json)
    }
}
