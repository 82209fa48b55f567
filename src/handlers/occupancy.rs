use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::bookings as store;
use crate::error::ApiError;
use crate::models::RoomRegistry;
use crate::occupancy;

/// Serves the dashboard's read model: the full occupancy view, rebuilt from
/// the booking list on every call.
pub async fn get_occupancy(
    pool: web::Data<SqlitePool>,
    registry: web::Data<RoomRegistry>,
) -> Result<HttpResponse, ApiError> {
    let bookings = store::list_all(&pool).await?;
    let view = occupancy::aggregate(&registry, &bookings);
    Ok(HttpResponse::Ok().json(view))
}
