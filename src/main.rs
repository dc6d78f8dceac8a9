use std::io;
use std::sync::{Arc, Mutex};

use log::info;

use actix_web::{App, HttpServer, middleware, web};

use ip_locator::config;
use ip_locator::handlers;
use ip_locator::types::{HealthStatus, ServerIpCache};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = config::read_config();
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(format!("{},actix_web=info,actix_server=info", config.log_level)),
    )
    .init();
    info!("Starting IP locator.");
    info!(
        "Geolocation API: {} (timeout {}s).",
        config.geo_api_url,
        config.geo_api_timeout.as_secs()
    );

    let cache = Arc::new(ServerIpCache::new());
    let health_status = Arc::new(Mutex::new(HealthStatus::new()));
    let port = config.port;

    // API.
    info!("Server starting on port {}", port);
    HttpServer::new(move || {
        App::new()
            // Enable the logger - always register actix-web Logger middleware last.
            .wrap(middleware::Logger::default())
            // App data.
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(web::Data::new(health_status.clone()))
            // Register HTTP requests handlers.
            .service(handlers::index)
            .service(handlers::server_ip)
            .service(handlers::client_ip)
            .service(handlers::health)
            .default_service(web::to(handlers::get_index))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
