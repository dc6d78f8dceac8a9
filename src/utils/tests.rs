use super::*;
use actix_web::{http::header, test};
use std::net::SocketAddr;

fn peer(addr: &str) -> SocketAddr {
    addr.parse().unwrap()
}

#[test]
async fn test_resolve_forwarded_for_wins() {
    let req = test::TestRequest::default()
        .insert_header(("X-Forwarded-For", "1.2.3.4"))
        .insert_header(("X-Real-IP", "5.6.7.8"))
        .peer_addr(peer("9.8.7.6:54321"))
        .to_http_request();

    assert_eq!("1.2.3.4", resolve_client_ip(&req));
}

#[test]
async fn test_resolve_real_ip() {
    let req = test::TestRequest::default()
        .insert_header(("X-Real-IP", "5.6.7.8"))
        .peer_addr(peer("9.8.7.6:54321"))
        .to_http_request();

    assert_eq!("5.6.7.8", resolve_client_ip(&req));
}

#[test]
async fn test_resolve_peer_addr() {
    let req = test::TestRequest::default()
        .peer_addr(peer("9.8.7.6:54321"))
        .to_http_request();

    assert_eq!("9.8.7.6", resolve_client_ip(&req));
}

#[test]
async fn test_resolve_empty_header_falls_through() {
    let req = test::TestRequest::default()
        .insert_header(("X-Forwarded-For", ""))
        .insert_header(("X-Real-IP", "5.6.7.8"))
        .to_http_request();

    assert_eq!("5.6.7.8", resolve_client_ip(&req));
}

#[test]
async fn test_resolve_invalid_header_falls_through() {
    let req = test::TestRequest::default()
        .insert_header((
            "X-Forwarded-For",
            header::HeaderValue::from_bytes(b"\xFF").unwrap(),
        ))
        .peer_addr(peer("9.8.7.6:54321"))
        .to_http_request();

    assert_eq!("9.8.7.6", resolve_client_ip(&req));
}

#[test]
async fn test_resolve_forwarded_chain_is_kept_verbatim() {
    let req = test::TestRequest::default()
        .insert_header(("X-Forwarded-For", "1.2.3.4, 5.6.7.8"))
        .to_http_request();

    assert_eq!("1.2.3.4, 5.6.7.8", resolve_client_ip(&req));
}

#[test]
async fn test_resolve_forwarded_with_port() {
    let req = test::TestRequest::default()
        .insert_header(("X-Forwarded-For", "1.2.3.4:8080"))
        .to_http_request();

    assert_eq!("1.2.3.4", resolve_client_ip(&req));
}

#[test]
async fn test_resolve_ipv6_peer_is_truncated() {
    // Known limitation: IPv6 peers format as `[addr]:port` and are cut at the first colon.
    let req = test::TestRequest::default()
        .peer_addr(peer("[::1]:54321"))
        .to_http_request();

    assert_eq!("[", resolve_client_ip(&req));
}

#[test]
async fn test_resolve_nothing_available() {
    let req = test::TestRequest::default().to_http_request();

    assert_eq!("", resolve_client_ip(&req));
}

#[test]
async fn test_strip_port() {
    assert_eq!("9.8.7.6", strip_port("9.8.7.6:54321"));
    assert_eq!("9.8.7.6", strip_port("9.8.7.6"));
    assert_eq!("", strip_port("::1:54321"));
    assert_eq!("2001", strip_port("2001:db8::1"));
    assert_eq!("", strip_port(""));
}

#[test]
async fn test_select_client_ip() {
    assert_eq!("1.2.3.4", select_client_ip("1.2.3.4", "5.6.7.8", "9.8.7.6:1"));
    assert_eq!("5.6.7.8", select_client_ip("", "5.6.7.8", "9.8.7.6:1"));
    assert_eq!("9.8.7.6", select_client_ip("", "", "9.8.7.6:1"));
    assert_eq!("", select_client_ip("", "", "::1:54321"));
    assert_eq!("", select_client_ip("", "", ""));
}
