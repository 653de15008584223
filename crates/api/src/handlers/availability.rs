//! # Availability Handler
//!
//! Computes the bookable times for a service on a requested calendar day.
//!
//! The handler is a thin shell around the pure calculator in
//! `chairtime_core::availability`: it resolves the service, fetches that
//! day's existing bookings, captures the current instant once, and hands all
//! three to the calculator. Keeping the clock read at this boundary means
//! the computation itself stays deterministic and directly testable.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chairtime_core::{
    availability::{available_slots, slot_catalog},
    errors::BookingError,
    models::availability::AvailabilityResponse,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the availability endpoint.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Calendar day to compute availability for (ISO 8601, e.g. 2026-08-07)
    pub date: NaiveDate,
}

/// Returns the open slots for a service on one day.
///
/// # Endpoint
///
/// ```text
/// GET /api/services/:id/availability?date=2026-08-07
/// ```
///
/// Slots that have already passed are only excluded when the requested day
/// is the current day; existing bookings exclude their exact time of day.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(service_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    // The service must exist before we compute anything for it
    chairtime_db::repositories::service::get_service_by_id(&state.db_pool, service_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Service with ID {} not found", service_id))
        })?;

    // Fetch the bookings already made for this service and day
    let bookings = chairtime_db::repositories::booking::get_bookings_for_day(
        &state.db_pool,
        service_id,
        query.date,
    )
    .await
    .map_err(BookingError::Database)?;

    let booked: Vec<DateTime<Utc>> = bookings.iter().map(|b| b.starts_at).collect();

    // The clock is read exactly once, here at the edge
    let times = available_slots(&slot_catalog(), query.date, &booked, Utc::now());

    let response = AvailabilityResponse {
        service_id,
        date: query.date,
        times: times
            .iter()
            .map(|slot| slot.format("%H:%M").to_string())
            .collect(),
    };

    Ok(Json(response))
}
