use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_GEO_API_TIMEOUT, DEFAULT_GEO_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_PORT,
};

#[derive(Clone)]
pub struct Config {
    /// The geolocation API url.
    pub geo_api_url: String,
    /// The geolocation API request timeout.
    pub geo_api_timeout: Duration,
    /// The listening port.
    pub port: u16,
    /// The log level.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            geo_api_url: String::from(DEFAULT_GEO_API_URL),
            geo_api_timeout: Duration::from_secs(DEFAULT_GEO_API_TIMEOUT),
            port: DEFAULT_PORT,
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

/// Read the configuration from the environment variables.
/// # Returns
/// The configuration.
pub fn read_config() -> Config {
    let mut config = Config::default();

    // Get the geolocation API url.
    if let Ok(url) = env::var("GEO_API_URL") {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            panic!("$GEO_API_URL must start with 'http://' or 'https://'.");
        }
        if let Err(err) = url::Url::parse(&url) {
            panic!("Failed to parse GEO_API_URL value as url. Error: {}", err);
        }
        config.geo_api_url = url;
    }

    // Get the request timeout.
    config.geo_api_timeout = match env::var("GEO_API_TIMEOUT") {
        Ok(val) => match val.parse::<u64>() {
            Ok(0) | Err(_) => panic!("Failed to parse GEO_API_TIMEOUT value as positive integer."),
            Ok(result) => Duration::from_secs(result),
        },
        Err(_) => config.geo_api_timeout,
    };

    // Get the listening port.
    config.port = match env::var("PORT") {
        Ok(val) => val.parse::<u16>().unwrap_or(config.port),
        Err(_) => config.port,
    };

    // Get the log level.
    config.log_level = match env::var("LOG_LEVEL") {
        Ok(val) => {
            let level = val.to_lowercase();
            match level.as_str() {
                "debug" | "info" | "warn" | "error" => level,
                _ => {
                    eprintln!(
                        "Invalid LOG_LEVEL '{}'. Using default '{}'. Valid values: debug, info, warn, error",
                        val, DEFAULT_LOG_LEVEL
                    );
                    String::from(DEFAULT_LOG_LEVEL)
                }
            }
        }
        Err(_) => String::from(DEFAULT_LOG_LEVEL),
    };
    config
}
