//! Booking record store: create and list-all, nothing else. Bookings are
//! never updated or deleted once written.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Booking, CreateBooking};

const BOOKING_COLUMNS: &str = "id, room, check_in, check_out, guest_name, room_type, \
                               check_in_meter, check_out_meter, phone_number";

pub async fn create(pool: &SqlitePool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
    let sql = format!(
        "INSERT INTO bookings \
             (room, check_in, check_out, guest_name, room_type, \
              check_in_meter, check_out_meter, phone_number, idempotency_key) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {BOOKING_COLUMNS}"
    );
    sqlx::query_as::<_, Booking>(&sql)
        .bind(&input.room)
        .bind(input.check_in)
        .bind(input.check_out)
        .bind(&input.guest_name)
        .bind(&input.room_type)
        .bind(input.check_in_meter)
        .bind(input.check_out_meter)
        .bind(&input.phone_number)
        .bind(input.idempotency_key.map(|k| k.to_string()))
        .fetch_one(pool)
        .await
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Booking>, sqlx::Error> {
    let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY id");
    sqlx::query_as::<_, Booking>(&sql).fetch_all(pool).await
}

pub async fn find_by_idempotency_key(
    pool: &SqlitePool,
    key: &Uuid,
) -> Result<Option<Booking>, sqlx::Error> {
    let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE idempotency_key = ?");
    sqlx::query_as::<_, Booking>(&sql)
        .bind(key.to_string())
        .fetch_optional(pool)
        .await
}
