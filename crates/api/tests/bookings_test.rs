mod test_utils;

use axum::Json;
use chairtime_api::middleware::error_handling::AppError;
use chairtime_core::{
    availability::slot_catalog,
    errors::BookingError,
    models::booking::{
        Booking, BookingStatus, BookingSummary, CreateBookingRequest, CreateBookingResponse,
        GetBookingsResponse,
    },
};
use chairtime_db::models::{DbBooking, DbBookingWithService};
use chrono::{DateTime, TimeZone, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn sample_service(id: Uuid) -> chairtime_db::models::DbService {
    chairtime_db::models::DbService {
        id,
        name: "Haircut".to_string(),
        description: "Classic cut".to_string(),
        price_cents: 4500,
        image_url: "/images/haircut.png".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

// Mirror of the create-booking handler against mock repositories: validate
// the requested time, resolve the service, then persist and surface a lost
// race as a conflict.
async fn test_create_booking_wrapper(
    ctx: &mut TestContext,
    payload: CreateBookingRequest,
    now: DateTime<Utc>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    if !slot_catalog().contains(&payload.starts_at.time()) {
        return Err(AppError(BookingError::Validation(format!(
            "{} is not a bookable time",
            payload.starts_at.format("%H:%M:%S")
        ))));
    }

    if payload.starts_at < now {
        return Err(AppError(BookingError::Validation(
            "Cannot book a time in the past".to_string(),
        )));
    }

    if ctx
        .service_repo
        .get_service_by_id(payload.service_id)
        .await?
        .is_none()
    {
        return Err(AppError(BookingError::NotFound(format!(
            "Service with ID {} not found",
            payload.service_id
        ))));
    }

    let booking = ctx
        .booking_repo
        .create_booking(payload.service_id, payload.user_id, payload.starts_at)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::Conflict(format!(
                "Time slot {} is no longer available",
                payload.starts_at.format("%Y-%m-%d %H:%M")
            )))
        })?;

    Ok(Json(CreateBookingResponse {
        id: booking.id,
        service_id: booking.service_id,
        starts_at: booking.starts_at,
        created_at: booking.created_at,
    }))
}

#[tokio::test]
async fn test_create_booking_success() {
    let mut ctx = TestContext::new();
    let service_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    let starts_at = Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap();

    ctx.service_repo
        .expect_get_service_by_id()
        .returning(move |id| Ok(Some(sample_service(id))));

    ctx.booking_repo
        .expect_create_booking()
        .with(
            predicate::eq(service_id),
            predicate::eq(user_id),
            predicate::eq(starts_at),
        )
        .returning(|service_id, user_id, starts_at| {
            Ok(Some(DbBooking {
                id: Uuid::new_v4(),
                service_id,
                user_id,
                starts_at,
                created_at: starts_at,
            }))
        });

    let payload = CreateBookingRequest {
        service_id,
        user_id,
        starts_at,
    };
    let result = test_create_booking_wrapper(&mut ctx, payload, now).await;

    let response = result.unwrap().0;
    assert_eq!(response.service_id, service_id);
    assert_eq!(response.starts_at, starts_at);
}

#[tokio::test]
async fn test_create_booking_rejects_off_catalog_time() {
    let mut ctx = TestContext::new();
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    // 09:10 is not one of the half-hour catalog slots
    let payload = CreateBookingRequest {
        service_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        starts_at: Utc.with_ymd_and_hms(2026, 8, 7, 9, 10, 0).unwrap(),
    };
    let result = test_create_booking_wrapper(&mut ctx, payload, now).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_booking_rejects_past_instant() {
    let mut ctx = TestContext::new();
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    let payload = CreateBookingRequest {
        service_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        starts_at: Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap(),
    };
    let result = test_create_booking_wrapper(&mut ctx, payload, now).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_booking_conflict_when_slot_taken() {
    let mut ctx = TestContext::new();
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    ctx.service_repo
        .expect_get_service_by_id()
        .returning(move |id| Ok(Some(sample_service(id))));

    // The storage layer reports the slot as already taken
    ctx.booking_repo
        .expect_create_booking()
        .returning(|_, _, _| Ok(None));

    let payload = CreateBookingRequest {
        service_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        starts_at: Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap(),
    };
    let result = test_create_booking_wrapper(&mut ctx, payload, now).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Conflict(_) => {} // Expected
        e => panic!("Expected Conflict error, got: {:?}", e),
    }
}

// Mirror of the booking listing handler: fetch both groups and stamp each
// entry with its status relative to now.
async fn test_list_bookings_wrapper(
    ctx: &mut TestContext,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Json<GetBookingsResponse>, AppError> {
    let to_summary = |db: DbBookingWithService| BookingSummary {
        id: db.id,
        service_id: db.service_id,
        service_name: db.service_name,
        price_cents: db.price_cents,
        status: BookingStatus::at(db.starts_at, now),
        starts_at: db.starts_at,
    };

    let upcoming = ctx
        .booking_repo
        .list_upcoming_bookings_by_user(user_id, now)
        .await?;
    let past = ctx
        .booking_repo
        .list_past_bookings_by_user(user_id, now)
        .await?;

    Ok(Json(GetBookingsResponse {
        confirmed: upcoming.into_iter().map(to_summary).collect(),
        concluded: past.into_iter().map(to_summary).collect(),
    }))
}

fn joined_booking(user_id: Uuid, starts_at: DateTime<Utc>) -> DbBookingWithService {
    DbBookingWithService {
        id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        user_id,
        starts_at,
        created_at: starts_at,
        service_name: "Haircut".to_string(),
        price_cents: 4500,
    }
}

#[tokio::test]
async fn test_list_bookings_splits_by_status() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    let future = Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap();
    let past = Utc.with_ymd_and_hms(2026, 8, 1, 14, 0, 0).unwrap();

    ctx.booking_repo
        .expect_list_upcoming_bookings_by_user()
        .returning(move |user_id, _| Ok(vec![joined_booking(user_id, future)]));

    ctx.booking_repo
        .expect_list_past_bookings_by_user()
        .returning(move |user_id, _| Ok(vec![joined_booking(user_id, past)]));

    let result = test_list_bookings_wrapper(&mut ctx, user_id, now).await;

    let response = result.unwrap().0;
    assert_eq!(response.confirmed.len(), 1);
    assert_eq!(response.confirmed[0].status, BookingStatus::Confirmed);
    assert_eq!(response.confirmed[0].service_name, "Haircut");
    assert_eq!(response.concluded.len(), 1);
    assert_eq!(response.concluded[0].status, BookingStatus::Concluded);
}

// Mirror of the get-booking handler: resolve by id or report NotFound.
async fn test_get_booking_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
) -> Result<Json<Booking>, AppError> {
    let booking = ctx
        .booking_repo
        .get_booking_by_id(id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!("Booking with ID {} not found", id)))
        })?;

    Ok(Json(Booking {
        id: booking.id,
        service_id: booking.service_id,
        user_id: booking.user_id,
        starts_at: booking.starts_at,
        created_at: booking.created_at,
    }))
}

#[tokio::test]
async fn test_get_booking_success() {
    let mut ctx = TestContext::new();
    let booking_id = Uuid::new_v4();
    let starts_at = Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap();

    ctx.booking_repo
        .expect_get_booking_by_id()
        .with(predicate::eq(booking_id))
        .returning(move |id| {
            Ok(Some(DbBooking {
                id,
                service_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                starts_at,
                created_at: starts_at,
            }))
        });

    let result = test_get_booking_wrapper(&mut ctx, booking_id).await;

    let booking = result.unwrap().0;
    assert_eq!(booking.id, booking_id);
    assert_eq!(booking.starts_at, starts_at);
}

#[tokio::test]
async fn test_get_booking_not_found() {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_get_booking_by_id()
        .returning(|_| Ok(None));

    let result = test_get_booking_wrapper(&mut ctx, Uuid::new_v4()).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

// Mirror of the delete handler: a missing row becomes NotFound.
async fn test_delete_booking_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
) -> Result<(), AppError> {
    let deleted = ctx.booking_repo.delete_booking(id).await?;
    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Booking with ID {} not found",
            id
        ))));
    }
    Ok(())
}

#[tokio::test]
async fn test_delete_booking_success() {
    let mut ctx = TestContext::new();
    let booking_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_delete_booking()
        .with(predicate::eq(booking_id))
        .returning(|_| Ok(true));

    let result = test_delete_booking_wrapper(&mut ctx, booking_id).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_booking_not_found() {
    let mut ctx = TestContext::new();
    let booking_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_delete_booking()
        .returning(|_| Ok(false));

    let result = test_delete_booking_wrapper(&mut ctx, booking_id).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}
