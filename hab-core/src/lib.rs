//! Core types for the hab booking backend.
//!
//! This crate holds everything that is not transport:
//! - `record` for the persisted `AppointmentRecord` and the incoming `BookingRequest`
//! - `store` for the `RecordStore` trait and its JSON-file and in-memory implementations
//! - `service` for the create/delete/list/lookup rules
//! - `export` for rendering the collection as CSV

pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod record;
pub mod reference;
pub mod service;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::HabConfig;
pub use error::{HabError, HabResult};
pub use record::{AgeInput, AppointmentRecord, BookingRequest, CreatedBooking, RecordCollection};
pub use service::AppointmentService;
pub use store::{JsonFileStore, MemoryStore, RecordStore};
