use std::sync::Arc;

use anyhow::Result;
use hab_core::{AppointmentService, HabConfig, JsonFileStore, RecordStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // No cache: the service re-reads the data file on every request
    service: AppointmentService,
}

impl AppState {
    pub fn new(config: &HabConfig) -> Result<Self> {
        let store = JsonFileStore::new(config.data_path());
        store.ensure_initialized()?;

        Ok(Self::from_service(AppointmentService::new(Arc::new(store))))
    }

    pub fn from_service(service: AppointmentService) -> Self {
        AppState { service }
    }

    pub fn service(&self) -> &AppointmentService {
        &self.service
    }
}
