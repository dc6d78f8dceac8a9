use std::sync::{Arc, Mutex};

use log::{debug, error, warn};

use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse, get};

use rust_embed::Embed;

use serde::Serialize;

use crate::config::Config;
use crate::constants::{APPLICATION_JSON, INDEX_FILE, TEXT_HTML, TEXT_PLAIN};
use crate::errors::AssetError;
use crate::geolocation::fetch_server_geo;
use crate::types::{HealthStatus, ServerIpCache};
use crate::utils::resolve_client_ip;


/// The bundled front end.
#[derive(Embed)]
#[folder = "static/"]
pub struct StaticAssets;

/// The client IP response body.
#[derive(Debug, Serialize)]
pub struct ClientIp {
    pub ip: String,
}

fn internal_error_response(message: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(TEXT_PLAIN)
        .body(message)
}

fn set_health_status(health_status: &Arc<Mutex<HealthStatus>>, healthy: bool) {
    if let Ok(mut health_status) = health_status.lock() {
        health_status.upstream_status = healthy;
    }
}

/// Load an embedded static file.
/// # Arguments
/// * `path` - The path relative to the static folder.
/// # Returns
/// * The file content or `AssetError` if it is not bundled.
pub fn load_asset(path: &str) -> Result<Vec<u8>, AssetError> {
    StaticAssets::get(path)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| AssetError::AssetNotFound {
            path: path.to_string(),
        })
}

/// Serve a bundled HTML page.
/// # Arguments
/// * `path` - The path relative to the static folder.
/// # Returns
/// * `HttpResponse` - The page or an internal server error.
pub fn get_page(path: &str) -> HttpResponse {
    match load_asset(path) {
        Ok(content) => HttpResponse::Ok().content_type(TEXT_HTML).body(content),
        Err(err) => {
            warn!("Could not serve page. Error: {}", err);
            internal_error_response(err.to_string())
        }
    }
}

/// Serve the index page for any path no other route matches.
/// Register with `App::default_service(web::to(get_index))`.
pub async fn get_index() -> HttpResponse {
    get_page(INDEX_FILE)
}

/// Serve the index page.
#[get("/")]
pub async fn index() -> HttpResponse {
    get_index().await
}

/// Look up the server IP, store it and return it.
/// # Arguments
/// * `config` - The configuration.
/// * `cache` - The server IP cache.
/// * `health_status` - The health status.
/// # Returns
/// * `HttpResponse` - The fresh record as JSON or the error message.
pub async fn get_server_ip(
    config: &Config,
    cache: &ServerIpCache,
    health_status: &Arc<Mutex<HealthStatus>>,
) -> HttpResponse {
    match fetch_server_geo(&config.geo_api_url, config.geo_api_timeout).await {
        Ok(record) => {
            set_health_status(health_status, true);
            cache.replace(record.clone());
            HttpResponse::Ok().content_type(APPLICATION_JSON).json(record)
        }
        Err(err) => {
            error!("Could not look up the server IP. Error: {}", err);
            set_health_status(health_status, false);
            internal_error_response(err.to_string())
        }
    }
}

/// Look up the public IP and location of the server.
/// # Arguments
/// * `config` - The configuration.
/// * `cache` - The server IP cache.
/// * `health_status` - The health status.
/// # Returns
/// * `HttpResponse` - The HTTP response. Either `Ok` with JSON or `InternalServerError`.
#[get("/api/server-ip")]
pub async fn server_ip(
    config: Data<Config>,
    cache: Data<Arc<ServerIpCache>>,
    health_status: Data<Arc<Mutex<HealthStatus>>>,
) -> HttpResponse {
    get_server_ip(&config, &cache, &health_status).await
}

/// Get the IP address of the requesting client.
/// # Arguments
/// * `request` - The HTTP request.
/// # Returns
/// * `HttpResponse` - The client IP as JSON.
#[get("/api/client-ip")]
pub async fn client_ip(request: HttpRequest) -> HttpResponse {
    let ip = resolve_client_ip(&request);
    debug!("Client IP resolved: {}", ip);
    HttpResponse::Ok()
        .content_type(APPLICATION_JSON)
        .json(ClientIp { ip })
}

/// Get the health status of the service.
/// # Arguments
/// * `health_status` - The health status.
/// # Returns
/// * `HttpResponse` - The HTTP response.
pub async fn get_health(health_status: &Arc<Mutex<HealthStatus>>) -> HttpResponse {
    if let Ok(health_status) = health_status.lock()
        && health_status.healthy()
    {
        return HttpResponse::Ok().content_type(TEXT_PLAIN).body("OK");
    }
    HttpResponse::ServiceUnavailable()
        .content_type(TEXT_PLAIN)
        .body("NOT OK")
}

/// Report whether the last geolocation lookup succeeded.
/// # Arguments
/// * `health_status` - The shared health status.
/// # Returns
/// * `HttpResponse` - `Ok` with `OK` or `ServiceUnavailable` with `NOT OK`.
#[get("/api/health")]
pub async fn health(health_status: Data<Arc<Mutex<HealthStatus>>>) -> HttpResponse {
    get_health(&health_status).await
}
