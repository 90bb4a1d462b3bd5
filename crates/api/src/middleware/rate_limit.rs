//! Rate limiting middleware for public submissions.
//!
//! Newsletter sign-ups and contact messages are limited per client IP.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovRateLimiter,
};
use serde_json::json;
use std::{
    collections::HashMap,
    net::{IpAddr, SocketAddr},
    num::NonZeroU32,
    sync::{Arc, RwLock},
};

use crate::app::AppState;

type ClientRateLimiter = GovRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Rate limiter state shared across all requests, one limiter per client IP.
pub struct RateLimiterState {
    limiters: RwLock<HashMap<IpAddr, Arc<ClientRateLimiter>>>,
    per_minute: u32,
}

impl RateLimiterState {
    pub fn new(per_minute: u32) -> Self {
        Self {
            limiters: RwLock::new(HashMap::new()),
            per_minute,
        }
    }

    pub fn per_minute(&self) -> u32 {
        self.per_minute
    }

    fn get_or_create_limiter(&self, client: IpAddr) -> Arc<ClientRateLimiter> {
        {
            let limiters = self.limiters.read().unwrap_or_else(|e| e.into_inner());
            if let Some(limiter) = limiters.get(&client) {
                return limiter.clone();
            }
        }

        let mut limiters = self.limiters.write().unwrap_or_else(|e| e.into_inner());
        limiters
            .entry(client)
            .or_insert_with(|| {
                let quota =
                    Quota::per_minute(NonZeroU32::new(self.per_minute).unwrap_or(NonZeroU32::MIN));
                Arc::new(GovRateLimiter::direct(quota))
            })
            .clone()
    }

    /// Ok if the request may proceed, otherwise the retry delay in seconds.
    pub fn check(&self, client: IpAddr) -> Result<(), u64> {
        let limiter = self.get_or_create_limiter(client);
        limiter.check().map_err(|not_until| {
            let wait = not_until.wait_time_from(DefaultClock::default().now());
            wait.as_secs().max(1)
        })
    }
}

impl std::fmt::Debug for RateLimiterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clients = self
            .limiters
            .read()
            .map(|l| l.len())
            .unwrap_or_default();
        f.debug_struct("RateLimiterState")
            .field("per_minute", &self.per_minute)
            .field("clients", &clients)
            .finish()
    }
}

/// Best-effort client address: first `X-Forwarded-For` hop, then the peer
/// address.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok())
        .or_else(|| peer.map(|p| p.ip()))
}

/// Middleware that limits public submissions per client IP.
///
/// Requests with no identifiable client pass through.
pub async fn submission_rate_limit(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(limiter) = state.rate_limiter.as_ref() else {
        return next.run(req).await;
    };

    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    if let Some(client) = client_ip(req.headers(), peer) {
        if let Err(retry_after) = limiter.check(client) {
            tracing::warn!(client = %client, path = %req.uri().path(), "Submission rate limited");
            return rate_limited_response(limiter.per_minute(), retry_after);
        }
    }

    next.run(req).await
}

fn rate_limited_response(limit: u32, retry_after: u64) -> Response {
    let body = json!({
        "error": "rate_limited",
        "message": format!("Rate limit of {} submissions/minute exceeded", limit),
    });

    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_rate_limiter_allows_requests() {
        let state = RateLimiterState::new(10);
        assert!(state.check(ip("10.0.0.1")).is_ok());
    }

    #[test]
    fn test_rate_limiter_exhaustion() {
        let state = RateLimiterState::new(2);
        let client = ip("10.0.0.1");
        assert!(state.check(client).is_ok());
        assert!(state.check(client).is_ok());

        let result = state.check(client);
        assert!(result.unwrap_err() >= 1);
    }

    #[test]
    fn test_rate_limiter_clients_independent() {
        let state = RateLimiterState::new(1);
        assert!(state.check(ip("10.0.0.1")).is_ok());
        assert!(state.check(ip("10.0.0.2")).is_ok());
        assert!(state.check(ip("10.0.0.1")).is_err());
        assert!(state.check(ip("::1")).is_ok());
    }

    #[test]
    fn test_get_or_create_idempotent() {
        let state = RateLimiterState::new(5);
        let a = state.get_or_create_limiter(ip("10.0.0.1"));
        let b = state.get_or_create_limiter(ip("10.0.0.1"));
        assert!(Arc::ptr_eq(&a, &b));
        assert!(format!("{:?}", state).contains("clients: 1"));
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        let peer: SocketAddr = "192.168.1.5:4000".parse().unwrap();
        assert_eq!(client_ip(&headers, Some(peer)), Some(ip("192.168.1.5")));

        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers, Some(peer)), Some(ip("203.0.113.7")));
    }

    #[test]
    fn test_client_ip_unknown() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, None), None);
        headers.insert("x-forwarded-for", HeaderValue::from_static("garbage"));
        assert_eq!(client_ip(&headers, None), None);
    }

    #[test]
    fn test_rate_limited_response_format() {
        let response = rate_limited_response(10, 42);
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "42");
    }
}
