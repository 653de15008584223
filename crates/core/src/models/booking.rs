use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub starts_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub service_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Whether a booking still lies in the future or has already taken place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Concluded,
}

impl BookingStatus {
    pub fn at(starts_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if starts_at > now {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Concluded
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSummary {
    pub id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub price_cents: i64,
    pub starts_at: DateTime<Utc>,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBookingsResponse {
    pub confirmed: Vec<BookingSummary>,
    pub concluded: Vec<BookingSummary>,
}
