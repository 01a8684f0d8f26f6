use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Best-effort client address: first `x-forwarded-for` entry, else the peer
/// address recorded by `into_make_service_with_connect_info`.
pub fn client_address(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn request_log_middleware(req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0);
    let client = client_address(req.headers(), peer);
    let method = req.method().clone();
    let uri = req.uri().clone();

    let res = next.run(req).await;

    tracing::info!(
        "{} {} from {} -> {}",
        method,
        uri,
        client,
        res.status().as_u16()
    );
    res
}
