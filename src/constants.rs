pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// The geolocation-by-IP endpoint queried when `GEO_API_URL` is not set.
pub const DEFAULT_GEO_API_URL: &str = "http://ip-api.com/json/";
/// Outbound request timeout in seconds.
pub const DEFAULT_GEO_API_TIMEOUT: u64 = 10;
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// The value of the upstream `status` field on a successful lookup.
pub const GEO_API_SUCCESS: &str = "success";

pub const INDEX_FILE: &str = "index.html";
