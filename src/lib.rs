//! Hotel room-booking tracker: booking API, occupancy projection and
//! WhatsApp confirmations for a small guesthouse.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod occupancy;

use std::sync::Arc;

use actix_web::web;
use sqlx::SqlitePool;

use crate::models::RoomRegistry;
use crate::notify::Notifier;

/// Registers application state and the API routes. Shared by the binary and
/// the integration tests so both run the same app.
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    pool: SqlitePool,
    registry: RoomRegistry,
    notifier: Arc<dyn Notifier>,
) {
    cfg.app_data(web::Data::new(pool))
        .app_data(web::Data::new(registry))
        .app_data(web::Data::from(notifier))
        .service(
            web::scope("/api")
                .route("/bookings", web::post().to(handlers::bookings::create_booking))
                .route("/bookings", web::get().to(handlers::bookings::list_bookings))
                .route("/occupancy", web::get().to(handlers::occupancy::get_occupancy)),
        );
}
