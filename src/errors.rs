use custom_error::custom_error;

custom_error! {
    pub GeoApiError
    NetworkError{error: reqwest::Error} = "failed to fetch IP: {error}",
    ParseError{error: serde_json::Error} = "failed to parse JSON: {error}",
    UpstreamError{status: String} = "API returned error status: {status}",
}

custom_error! {
    pub AssetError
    AssetNotFound{path: String} = "File not found: {path}",
}
