use std::sync::Arc;

use actix_files::Files;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use hotel_occupancy::config::Config;
use hotel_occupancy::models::RoomRegistry;
use hotel_occupancy::notify::{LogNotifier, Notifier, TwilioNotifier};
use hotel_occupancy::{configure_app, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().expect("Invalid environment configuration");

    log::info!("Connecting to database...");
    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to create pool");

    // Run migrations
    log::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let notifier: Arc<dyn Notifier> = match &config.twilio {
        Some(twilio) => Arc::new(TwilioNotifier::new(
            twilio.account_sid.clone(),
            twilio.auth_token.clone(),
            twilio.whatsapp_number.clone(),
        )),
        None => {
            log::warn!("Twilio credentials not set; confirmations will only be logged");
            Arc::new(LogNotifier)
        }
    };

    let registry = RoomRegistry::standard();
    let port = config.port;
    log::info!("Starting server at http://localhost:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(|cfg| {
                configure_app(cfg, pool.clone(), registry.clone(), notifier.clone());
            })
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
