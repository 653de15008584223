use chrono::{DateTime, NaiveDate, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, DbBookingWithService, DbService};

// Mock repositories for testing
mock! {
    pub ServiceRepo {
        pub async fn create_service(
            &self,
            name: &'static str,
            description: &'static str,
            price_cents: i64,
            image_url: &'static str,
        ) -> eyre::Result<DbService>;

        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn list_services(&self) -> eyre::Result<Vec<DbService>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            service_id: Uuid,
            user_id: Uuid,
            starts_at: DateTime<Utc>,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_bookings_for_day(
            &self,
            service_id: Uuid,
            day: NaiveDate,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn list_upcoming_bookings_by_user(
            &self,
            user_id: Uuid,
            now: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbBookingWithService>>;

        pub async fn list_past_bookings_by_user(
            &self,
            user_id: Uuid,
            now: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbBookingWithService>>;

        pub async fn delete_booking(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}
