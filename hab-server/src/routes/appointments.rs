//! Appointment endpoints

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use hab_core::{
    AppointmentRecord, BookingRequest, CreatedBooking, HabError, RecordCollection,
    service::NOT_FOUND,
};

use crate::routes::{ApiResponse, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // GET looks up by booking reference, DELETE by numeric id
    Router::new()
        .route(
            "/api/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route(
            "/api/appointments/{key}",
            get(get_appointment).delete(delete_appointment),
        )
}

/// GET /api/appointments - All appointments, newest first
async fn list_appointments(State(state): State<AppState>) -> Json<ApiResponse<RecordCollection>> {
    Json(ApiResponse::data(state.service().get_all()))
}

/// GET /api/appointments/:reference - One appointment by booking reference
async fn get_appointment(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<ApiResponse<AppointmentRecord>>, AppError> {
    let record = state.service().find_by_reference(&reference)?;
    Ok(Json(ApiResponse::data(record)))
}

/// POST /api/appointments - Book a new appointment
async fn create_appointment(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedBooking>>), AppError> {
    let Json(request) = payload.map_err(|e| HabError::Validation(e.body_text()))?;
    let created = state.service().create(request)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data_with_message(
            "Appointment booked successfully!",
            created,
        )),
    ))
}

/// DELETE /api/appointments/:id - Remove an appointment by numeric id
async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| HabError::NotFound(NOT_FOUND.to_string()))?;

    state.service().delete(id)?;

    Ok(Json(ApiResponse::message("Appointment deleted successfully")))
}
