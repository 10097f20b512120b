//! In-memory record store, used in tests and anywhere durable storage is unwanted.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, warn};

use super::{RecordStore, decode, encode};
use crate::error::HabResult;
use crate::record::RecordCollection;

/// Keeps the serialized document in memory so that load/save go through the
/// same JSON encoding as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// A store with no document yet; `ensure_initialized` creates one.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose document starts as `document`, verbatim.
    pub fn with_document(document: impl Into<String>) -> Self {
        MemoryStore {
            document: Mutex::new(Some(document.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn document(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Make every subsequent `save` fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.document.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> RecordCollection {
        let Some(document) = self.document() else {
            warn!("No appointments document in memory store");
            return Vec::new();
        };

        decode(&document).unwrap_or_else(|e| {
            error!(error = %e, "Error parsing appointments");
            Vec::new()
        })
    }

    fn save(&self, records: &RecordCollection) -> bool {
        if self.fail_writes.load(Ordering::SeqCst) {
            error!("Error writing appointments: memory store is set to fail writes");
            return false;
        }

        match encode(records) {
            Ok(document) => {
                *self.lock() = Some(document);
                true
            }
            Err(e) => {
                error!(error = %e, "Error writing appointments");
                false
            }
        }
    }

    fn ensure_initialized(&self) -> HabResult<()> {
        let mut document = self.lock();
        if document.is_none() {
            *document = Some(encode(&Vec::new())?);
        }
        Ok(())
    }
}
