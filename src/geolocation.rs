use std::time::Duration;

use log::info;

use crate::constants::GEO_API_SUCCESS;
use crate::errors::GeoApiError;
use crate::types::{GeoApiResponse, GeoRecord};


/// Call the geolocation API.
/// # Arguments
/// * `url` - The URL of the geolocation API.
/// * `timeout` - The request timeout.
/// # Returns
/// * The response of the geolocation API.
async fn get_request(url: &str, timeout: Duration) -> Result<reqwest::Response, reqwest::Error> {
    let client = reqwest::Client::new();
    client.get(url).timeout(timeout).send().await
}

/// Look up the public IP and location of the machine running this server.
/// The body is parsed regardless of the HTTP status, the upstream reports
/// failures through its `status` field.
/// # Arguments
/// * `url` - The URL of the geolocation API.
/// * `timeout` - The request timeout.
/// # Returns
/// * The freshly fetched `GeoRecord`.
/// * `GeoApiError` if the request, the parsing or the lookup failed.
pub async fn fetch_server_geo(url: &str, timeout: Duration) -> Result<GeoRecord, GeoApiError> {
    let res = get_request(url, timeout)
        .await
        .map_err(|err| GeoApiError::NetworkError { error: err })?;
    let body = res
        .bytes()
        .await
        .map_err(|err| GeoApiError::NetworkError { error: err })?;
    let response = serde_json::from_slice::<GeoApiResponse>(&body)
        .map_err(|err| GeoApiError::ParseError { error: err })?;
    if response.status != GEO_API_SUCCESS {
        return Err(GeoApiError::UpstreamError {
            status: response.status,
        });
    }

    let record = GeoRecord {
        ip: response.query,
        city: response.city,
        country: response.country,
        last_updated: chrono::Utc::now(),
    };
    info!(
        "IP fetched: {} ({}, {})",
        record.ip, record.city, record.country
    );
    Ok(record)
}
