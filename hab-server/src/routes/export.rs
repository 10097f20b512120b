//! CSV export endpoint

use axum::{Router, extract::State, http::header, response::IntoResponse, routing::get};
use hab_core::export::{CSV_CONTENT_TYPE, CSV_FILENAME};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/export", get(export_csv))
}

/// GET /api/export - Download every appointment as CSV, newest first
async fn export_csv(State(state): State<AppState>) -> impl IntoResponse {
    let csv = state.service().export_csv();

    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", CSV_FILENAME),
            ),
        ],
        csv,
    )
}
