use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Times still open for booking a service on one calendar day, formatted as
/// `HH:MM` strings in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub times: Vec<String>,
}
