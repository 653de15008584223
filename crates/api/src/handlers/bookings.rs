use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chairtime_core::{
    availability::slot_catalog,
    errors::BookingError,
    models::booking::{
        Booking, BookingStatus, BookingSummary, CreateBookingRequest, CreateBookingResponse,
        GetBookingsResponse,
    },
};
use chairtime_db::models::DbBookingWithService;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let now = Utc::now();

    // The requested time must match a catalog slot exactly
    if !slot_catalog().contains(&payload.starts_at.time()) {
        return Err(AppError(BookingError::Validation(format!(
            "{} is not a bookable time",
            payload.starts_at.format("%H:%M:%S")
        ))));
    }

    // An instant that already passed cannot be booked
    if payload.starts_at < now {
        return Err(AppError(BookingError::Validation(
            "Cannot book a time in the past".to_string(),
        )));
    }

    // The service must exist
    chairtime_db::repositories::service::get_service_by_id(&state.db_pool, payload.service_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Service with ID {} not found", payload.service_id))
        })?;

    // Persist; the storage layer resolves races on the same slot
    let booking = chairtime_db::repositories::booking::create_booking(
        &state.db_pool,
        payload.service_id,
        payload.user_id,
        payload.starts_at,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::Conflict(format!(
            "Time slot {} is no longer available",
            payload.starts_at.format("%Y-%m-%d %H:%M")
        ))
    })?;

    let response = CreateBookingResponse {
        id: booking.id,
        service_id: booking.service_id,
        starts_at: booking.starts_at,
        created_at: booking.created_at,
    };

    Ok(Json(response))
}

/// Query parameters for the booking listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub user_id: Uuid,
}

fn to_summary(db: DbBookingWithService, now: DateTime<Utc>) -> BookingSummary {
    BookingSummary {
        id: db.id,
        service_id: db.service_id,
        service_name: db.service_name,
        price_cents: db.price_cents,
        status: BookingStatus::at(db.starts_at, now),
        starts_at: db.starts_at,
    }
}

/// Lists a user's bookings, split into upcoming ("confirmed") and past
/// ("concluded") groups. Upcoming bookings come soonest-first, past ones
/// most-recent-first.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<GetBookingsResponse>, AppError> {
    let now = Utc::now();

    let upcoming = chairtime_db::repositories::booking::list_upcoming_bookings_by_user(
        &state.db_pool,
        query.user_id,
        now,
    )
    .await
    .map_err(BookingError::Database)?;

    let past = chairtime_db::repositories::booking::list_past_bookings_by_user(
        &state.db_pool,
        query.user_id,
        now,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = GetBookingsResponse {
        confirmed: upcoming.into_iter().map(|b| to_summary(b, now)).collect(),
        concluded: past.into_iter().map(|b| to_summary(b, now)).collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = chairtime_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    Ok(Json(Booking {
        id: booking.id,
        service_id: booking.service_id,
        user_id: booking.user_id,
        starts_at: booking.starts_at,
        created_at: booking.created_at,
    }))
}

#[axum::debug_handler]
pub async fn delete_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = chairtime_db::repositories::booking::delete_booking(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Booking with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
