use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Booking row joined with the columns of its service needed for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingWithService {
    pub id: Uuid,
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub service_name: String,
    pub price_cents: i64,
}
