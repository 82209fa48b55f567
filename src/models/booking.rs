use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub room: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_name: String,
    pub room_type: String,
    pub check_in_meter: Option<i64>,
    // None is stored and served as an explicit null, never coerced to zero
    pub check_out_meter: Option<i64>,
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub room: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(length(min = 1, message = "guest name must not be empty"))]
    pub guest_name: String,
    #[validate(length(min = 1, message = "room type must not be empty"))]
    pub room_type: String,
    #[serde(default)]
    pub check_in_meter: Option<i64>,
    #[serde(default)]
    pub check_out_meter: Option<i64>,
    #[validate(length(min = 4, message = "phone number is required for confirmation delivery"))]
    pub phone_number: String,
    /// Client-generated token, one per submission attempt. Replaying the same
    /// token returns the already-stored booking instead of creating a duplicate.
    #[serde(default)]
    pub idempotency_key: Option<Uuid>,
}
