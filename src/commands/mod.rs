pub mod book;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod show;

#[cfg(test)]
pub(crate) fn memory_service() -> (
    std::sync::Arc<hab_core::MemoryStore>,
    hab_core::AppointmentService,
) {
    use chrono::{TimeZone, Utc};
    use hab_core::{AppointmentService, ManualClock, MemoryStore, RecordStore};
    use std::sync::Arc;

    let store = Arc::new(MemoryStore::new());
    store.ensure_initialized().unwrap();
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
    ));
    (store.clone(), AppointmentService::with_clock(store, clock))
}
