//! Booking rules: create, delete, list and look up appointments.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{HabError, HabResult};
use crate::export;
use crate::record::{
    AppointmentRecord, BookingRequest, CreatedBooking, RecordCollection, sort_newest_first,
};
use crate::reference::BookingStamp;
use crate::store::RecordStore;

pub const NOT_FOUND: &str = "Appointment not found";
pub const SAVE_FAILED: &str = "Failed to save appointment";
pub const DELETE_FAILED: &str = "Failed to delete appointment";

/// Appointment operations over a record store.
///
/// Mutations load the whole collection, change it in memory and write it
/// back. There is no lock around that cycle: two concurrent mutations can
/// both load the same collection and the later write wins.
#[derive(Clone)]
pub struct AppointmentService {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
}

impl AppointmentService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        AppointmentService { store, clock }
    }

    pub fn create(&self, request: BookingRequest) -> HabResult<CreatedBooking> {
        let booking = request.validate()?;
        let stamp = BookingStamp::at(self.clock.now())?;
        let record = AppointmentRecord::new(booking, stamp);

        // Step one: load
        let mut records = self.store.load();
        let created = CreatedBooking {
            id: record.id,
            booking_reference: record.booking_reference.clone(),
        };
        records.push(record);

        // Step two: save, over whatever is there now
        if !self.store.save(&records) {
            return Err(HabError::Persistence(SAVE_FAILED.to_string()));
        }

        info!(
            id = created.id,
            reference = %created.booking_reference,
            "Appointment booked"
        );
        Ok(created)
    }

    pub fn delete(&self, id: i64) -> HabResult<()> {
        let mut records = self.store.load();
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            debug!(id, "Delete requested for unknown appointment");
            return Err(HabError::NotFound(NOT_FOUND.to_string()));
        }

        if !self.store.save(&records) {
            warn!(id, "Appointment removed in memory but the write failed");
            return Err(HabError::Persistence(DELETE_FAILED.to_string()));
        }

        info!(id, "Appointment deleted");
        Ok(())
    }

    /// All records, newest first.
    pub fn get_all(&self) -> RecordCollection {
        let mut records = self.store.load();
        sort_newest_first(&mut records);
        records
    }

    pub fn get_by_reference(&self, reference: &str) -> Option<AppointmentRecord> {
        self.store
            .load()
            .into_iter()
            .find(|r| r.booking_reference == reference)
    }

    /// Like `get_by_reference`, but a miss is an error.
    pub fn find_by_reference(&self, reference: &str) -> HabResult<AppointmentRecord> {
        self.get_by_reference(reference)
            .ok_or_else(|| HabError::NotFound(NOT_FOUND.to_string()))
    }

    /// CSV of all records, newest first.
    pub fn export_csv(&self) -> String {
        export::to_csv(&self.get_all())
    }
}
