use actix_web::HttpRequest;

#[cfg(test)]
mod tests;

/// Get a header value as string. Missing or non visible ASCII values count as empty.
fn header_value<'a>(request: &'a HttpRequest, name: &str) -> &'a str {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Cut the value at its first colon.
/// Note: this also cuts IPv6 literals, e.g. `::1:54321` becomes an empty string.
/// # Arguments
/// * `addr` - The address, optionally followed by `:port`.
/// # Returns
/// * The part before the first colon.
pub fn strip_port(addr: &str) -> &str {
    match addr.find(':') {
        Some(idx) => &addr[..idx],
        None => addr,
    }
}

/// Pick the first non-empty candidate and strip the port from it.
/// # Arguments
/// * `forwarded_for` - The `X-Forwarded-For` header value.
/// * `real_ip` - The `X-Real-IP` header value.
/// * `remote_addr` - The peer address of the connection.
/// # Returns
/// * The client IP, possibly empty.
pub fn select_client_ip(forwarded_for: &str, real_ip: &str, remote_addr: &str) -> String {
    let ip = [forwarded_for, real_ip, remote_addr]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default();
    strip_port(ip).to_string()
}

/// Resolve the IP address of the requesting client.
/// Proxy headers are trusted as they are, there is no allow-list of proxies.
/// # Arguments
/// * `request` - The HTTP request.
/// # Returns
/// * The client IP.
pub fn resolve_client_ip(request: &HttpRequest) -> String {
    let remote_addr = request
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_default();
    select_client_ip(
        header_value(request, "X-Forwarded-For"),
        header_value(request, "X-Real-IP"),
        &remote_addr,
    )
}
