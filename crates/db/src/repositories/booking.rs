use crate::models::{DbBooking, DbBookingWithService};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a booking for the given service and instant. Returns `None` when
/// another booking already holds that exact time, as enforced by the unique
/// constraint on (service_id, starts_at).
pub async fn create_booking(
    pool: &Pool<Postgres>,
    service_id: Uuid,
    user_id: Uuid,
    starts_at: DateTime<Utc>,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, service_id={}, user_id={}, starts_at={}",
        id,
        service_id,
        user_id,
        starts_at
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, service_id, user_id, starts_at, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (service_id, starts_at) DO NOTHING
        RETURNING id, service_id, user_id, starts_at, created_at
        "#,
    )
    .bind(id)
    .bind(service_id)
    .bind(user_id)
    .bind(starts_at)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if booking.is_none() {
        tracing::debug!(
            "Booking lost to an existing reservation: service_id={}, starts_at={}",
            service_id,
            starts_at
        );
    }

    Ok(booking)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    tracing::debug!("Getting booking by id: {}", id);

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, service_id, user_id, starts_at, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// Half-open UTC instant range [midnight, next midnight) covering `day`.
fn day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = (day + Days::new(1)).and_time(NaiveTime::MIN).and_utc();
    (start, end)
}

/// Fetches every booking of a service whose start falls on the given UTC
/// calendar day, ordered by start time.
pub async fn get_bookings_for_day(
    pool: &Pool<Postgres>,
    service_id: Uuid,
    day: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let (day_start, day_end) = day_bounds(day);

    tracing::debug!(
        "Getting bookings for service {} between {} and {}",
        service_id,
        day_start,
        day_end
    );

    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, service_id, user_id, starts_at, created_at
        FROM bookings
        WHERE service_id = $1 AND starts_at >= $2 AND starts_at < $3
        ORDER BY starts_at ASC
        "#,
    )
    .bind(service_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// A user's bookings that have not started yet, soonest first.
pub async fn list_upcoming_bookings_by_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<DbBookingWithService>> {
    tracing::debug!("Listing upcoming bookings for user {}", user_id);

    let bookings = sqlx::query_as::<_, DbBookingWithService>(
        r#"
        SELECT b.id, b.service_id, b.user_id, b.starts_at, b.created_at,
               s.name AS service_name, s.price_cents
        FROM bookings b
        JOIN services s ON s.id = b.service_id
        WHERE b.user_id = $1 AND b.starts_at > $2
        ORDER BY b.starts_at ASC
        "#,
    )
    .bind(user_id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// A user's bookings that already took place, most recent first.
pub async fn list_past_bookings_by_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<DbBookingWithService>> {
    tracing::debug!("Listing past bookings for user {}", user_id);

    let bookings = sqlx::query_as::<_, DbBookingWithService>(
        r#"
        SELECT b.id, b.service_id, b.user_id, b.starts_at, b.created_at,
               s.name AS service_name, s.price_cents
        FROM bookings b
        JOIN services s ON s.id = b.service_id
        WHERE b.user_id = $1 AND b.starts_at <= $2
        ORDER BY b.starts_at DESC
        "#,
    )
    .bind(user_id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Deletes a booking. Returns false when no row matched the id.
pub async fn delete_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting booking: {}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
