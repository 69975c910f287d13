//! Trusted-client middleware.
//!
//! Attached to the write/list/delete routes only; the public redirect route
//! is registered outside it, so which routes are public is decided where the
//! routes are declared rather than by matching path patterns here.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Reject the request with 403 unless the effective client address is on the
/// configured allow-list.
pub async fn require_trusted(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ip = client_ip(request.headers(), peer, state.config.trust_forwarded_for);

    match ip {
        Some(ip) if state.config.allowed_ips.contains(&ip) => Ok(next.run(request).await),
        _ => {
            tracing::warn!(
                "denied {} {} from {}",
                request.method(),
                request.uri().path(),
                ip.map_or_else(|| "unparseable address".into(), |i| i.to_string()),
            );
            Err(ApiError::AccessDenied)
        }
    }
}

/// Determine the effective client address.
///
/// The peer address from the transport is authoritative unless
/// `trust_forwarded_for` is enabled and the request carries an
/// X-Forwarded-For header, in which case the first (client-most) entry of
/// the header replaces it. A header value that is not an IP address yields
/// `None` and the request is denied.
fn client_ip(headers: &HeaderMap, peer: SocketAddr, trust_forwarded_for: bool) -> Option<IpAddr> {
    if trust_forwarded_for {
        if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            if let Some(first) = xff.split(',').next().map(str::trim).filter(|s| !s.is_empty()) {
                // Strip the IPv6-mapped IPv4 prefix: "::ffff:1.2.3.4" → "1.2.3.4"
                let first = first.strip_prefix("::ffff:").unwrap_or(first);
                return first.parse().ok();
            }
        }
    }

    Some(peer.ip())
}
