use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::db::bookings as store;
use crate::error::ApiError;
use crate::models::{CreateBooking, RoomRegistry};
use crate::notify::{format_booking_message, NotificationStatus, Notifier};

/// Booking submission workflow: validate, persist, notify.
///
/// Persistence and notification are deliberately not atomic. A booking that
/// was written stays written; a failed confirmation send is reported in the
/// response body (`notification: "failed"`) on an otherwise successful 201.
pub async fn create_booking(
    pool: web::Data<SqlitePool>,
    registry: web::Data<RoomRegistry>,
    notifier: web::Data<dyn Notifier>,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    log::info!("received booking request for room {}", input.room);

    input
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    if !registry.contains(&input.room) {
        return Err(ApiError::UnknownRoom(input.room));
    }
    if registry.is_unavailable(&input.room) {
        return Err(ApiError::RoomUnavailable(input.room));
    }
    if input.check_out < input.check_in {
        return Err(ApiError::Validation(
            "check-out date must not precede check-in date".to_string(),
        ));
    }

    // A retried submission carries the key of the attempt that may already
    // have gone through; replay the stored record instead of duplicating it.
    if let Some(key) = &input.idempotency_key {
        if let Some(existing) = store::find_by_idempotency_key(&pool, key).await? {
            log::info!("replaying booking {} for idempotency key {key}", existing.id);
            return Ok(HttpResponse::Ok().json(json!({
                "message": "Booking already recorded",
                "booking": existing,
                "notification": NotificationStatus::Skipped,
            })));
        }
    }

    let booking = match store::create(&pool, &input).await {
        Ok(booking) => booking,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            // Lost the race against a concurrent retry of the same submission.
            let key = input
                .idempotency_key
                .ok_or_else(|| ApiError::Persistence(sqlx::Error::Database(db_err)))?;
            let existing = store::find_by_idempotency_key(&pool, &key)
                .await?
                .ok_or_else(|| {
                    ApiError::Persistence(sqlx::Error::RowNotFound)
                })?;
            return Ok(HttpResponse::Ok().json(json!({
                "message": "Booking already recorded",
                "booking": existing,
                "notification": NotificationStatus::Skipped,
            })));
        }
        Err(err) => return Err(err.into()),
    };
    log::info!("booking {} saved for room {}", booking.id, booking.room);

    let message = format_booking_message(&booking);
    let notification = match notifier.send(&booking.phone_number, &message).await {
        Ok(status) => {
            log::info!("confirmation for booking {}: {status:?}", booking.id);
            status
        }
        Err(err) => {
            log::error!("confirmation for booking {} failed: {err}", booking.id);
            NotificationStatus::Failed
        }
    };

    Ok(HttpResponse::Created().json(json!({
        "message": "Booking created",
        "booking": booking,
        "notification": notification,
    })))
}

pub async fn list_bookings(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let bookings = store::list_all(&pool).await?;
    log::info!("fetched {} bookings", bookings.len());
    Ok(HttpResponse::Ok().json(bookings))
}
