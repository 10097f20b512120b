//! Durable storage for the appointment collection.
//!
//! The whole collection lives in one JSON document. Every `load` re-reads it
//! and every `save` overwrites it, so a load-modify-save cycle is two separate
//! steps: a concurrent writer can slip in between them and one of the two
//! writes is lost.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde_json::Value;
use tracing::warn;

use crate::error::HabResult;
use crate::record::{AppointmentRecord, RecordCollection};

pub trait RecordStore: Send + Sync {
    /// Read the full collection. Read or parse failures are logged and
    /// yield an empty collection.
    fn load(&self) -> RecordCollection;

    /// Overwrite the document with `records`. Returns `false` (after logging)
    /// if the write failed.
    fn save(&self, records: &RecordCollection) -> bool;

    /// Create an empty document if none exists yet. Safe to call repeatedly.
    fn ensure_initialized(&self) -> HabResult<()>;
}

/// Serialize the collection the way it is kept on disk (2-space indented JSON array).
pub fn encode(records: &RecordCollection) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Parse the document record by record. Only a document that is not a JSON
/// array is an error; an unreadable record is logged and skipped.
pub fn decode(document: &str) -> serde_json::Result<RecordCollection> {
    let entries: Vec<Value> = serde_json::from_str(document)?;

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            serde_json::from_value::<AppointmentRecord>(entry)
                .map_err(|e| warn!(index, error = %e, "Skipping unreadable appointment record"))
                .ok()
        })
        .collect())
}
