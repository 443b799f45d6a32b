use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use namescore_report::Viewer;
use serde::Serialize;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Bearer-key settings used to derive the [`Viewer`] for each request.
///
/// Keys are held only as salted SHA-256 digests.
#[derive(Debug, Clone)]
pub struct AuthState {
    key_digests: Arc<Vec<[u8; 32]>>,
    salt: Arc<str>,
    pub enabled: bool,
}

impl AuthState {
    /// Builds auth config from `NAMESCORE_API_KEYS` (comma-separated bearer tokens).
    ///
    /// In development, empty/missing keys disable auth and every viewer is
    /// treated as authenticated. In non-development envs, empty/missing keys
    /// fail startup.
    pub fn from_env(is_development: bool, salt: Option<&str>) -> anyhow::Result<Self> {
        let raw = std::env::var("NAMESCORE_API_KEYS").unwrap_or_default();
        let keys: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if keys.is_empty() {
            if is_development {
                tracing::warn!(
                    "NAMESCORE_API_KEYS not set; bearer auth disabled in development environment"
                );
                return Ok(Self::disabled());
            }

            anyhow::bail!(
                "NAMESCORE_API_KEYS is required outside development; provide comma-separated bearer tokens"
            );
        }

        if salt.is_none() {
            tracing::warn!("NAMESCORE_API_KEY_HASH_SALT not set; hashing API keys without a salt");
        }
        Ok(Self::with_keys(keys, salt.unwrap_or_default()))
    }

    #[must_use]
    pub fn with_keys<'a>(keys: impl IntoIterator<Item = &'a str>, salt: &str) -> Self {
        let key_digests = keys.into_iter().map(|k| salted_digest(salt, k)).collect();
        Self {
            key_digests: Arc::new(key_digests),
            salt: Arc::from(salt),
            enabled: true,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            key_digests: Arc::new(Vec::new()),
            salt: Arc::from(""),
            enabled: false,
        }
    }

    /// Checks every configured key in constant time; never short-circuits.
    fn allows(&self, token: &str) -> bool {
        let candidate = salted_digest(&self.salt, token);
        self.key_digests
            .iter()
            .fold(subtle::Choice::from(0), |found, digest| {
                found | digest.as_slice().ct_eq(candidate.as_slice())
            })
            .into()
    }
}

fn salted_digest(salt: &str, token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Fixed-window limiter for simple API protection.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    state: Arc<Mutex<RateLimitWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(RateLimitWindow {
                started_at: Instant::now(),
                count: 0,
            })),
        }
    }
}

#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    error: MiddlewareError,
}

#[derive(Debug, Serialize)]
struct MiddlewareError {
    code: &'static str,
    message: &'static str,
}

fn middleware_error(status: StatusCode, code: &'static str, message: &'static str) -> Response {
    (
        status,
        Json(MiddlewareErrorBody {
            error: MiddlewareError { code, message },
        }),
    )
        .into_response()
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware inserting the request's [`Viewer`] as an extension.
///
/// No bearer token means an anonymous viewer. A token that matches no
/// configured key is rejected outright.
pub async fn resolve_viewer(State(auth): State<AuthState>, mut req: Request, next: Next) -> Response {
    let viewer = if auth.enabled {
        match extract_bearer_token(req.headers().get(AUTHORIZATION)) {
            None => Viewer::anonymous(),
            Some(token) if auth.allows(token) => Viewer::authenticated(),
            Some(_) => {
                tracing::debug!("rejected bearer token");
                return middleware_error(
                    StatusCode::UNAUTHORIZED,
                    "unauthorized",
                    "invalid bearer token",
                );
            }
        }
    } else {
        Viewer::authenticated()
    };

    req.extensions_mut().insert(viewer);
    next.run(req).await
}

/// Middleware enforcing a fixed request-per-window limit.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let mut window = rate_limit.state.lock().await;
    let elapsed = window.started_at.elapsed();

    if elapsed >= rate_limit.window {
        window.started_at = Instant::now();
        window.count = 0;
    }

    if window.count >= rate_limit.max_requests {
        return middleware_error(
            StatusCode::TOO_MANY_REQUESTS,
            "rate_limited",
            "rate limit exceeded",
        );
    }

    window.count += 1;
    drop(window);

    next.run(req).await
}

fn extract_bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bearer_token_accepts_valid_header() {
        let header = HeaderValue::from_static("Bearer test-token");
        assert_eq!(extract_bearer_token(Some(&header)), Some("test-token"));
    }

    #[test]
    fn extract_bearer_token_rejects_non_bearer_header() {
        let header = HeaderValue::from_static("Basic abc123");
        assert_eq!(extract_bearer_token(Some(&header)), None);
    }

    #[test]
    fn configured_keys_are_matched_by_salted_digest() {
        let auth = AuthState::with_keys(["alpha", "beta"], "pepper");
        assert!(auth.allows("alpha"));
        assert!(auth.allows("beta"));
        assert!(!auth.allows("gamma"));
        assert!(!auth.allows(""));
    }

    #[test]
    fn salt_changes_stored_digest() {
        assert_ne!(salted_digest("a", "key"), salted_digest("b", "key"));
        let auth = AuthState::with_keys(["key"], "a");
        assert!(!auth.key_digests.contains(&salted_digest("", "key")));
    }

    #[test]
    fn disabled_auth_allows_nothing_by_key() {
        let auth = AuthState::disabled();
        assert!(!auth.enabled);
        assert!(!auth.allows("anything"));
    }
}
