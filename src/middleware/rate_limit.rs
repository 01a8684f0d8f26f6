//! Per-IP rate limiting for the login route.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread::JoinHandle;
use std::time::Duration;

use axum::{body::Body, Router};
use http::{HeaderValue, StatusCode};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::SmartIpKeyExtractor;
use tower_governor::{GovernorError, GovernorLayer};

use crate::config::RateLimitConfig;
use crate::i18n;
use crate::AppState;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

fn json_response(status: StatusCode, message: String) -> http::Response<Body> {
    // Same shape as the `{ code, message, data }` error envelope.
    let body = serde_json::json!({
        "code": status.as_u16(),
        "message": message,
        "data": null,
    })
    .to_string();

    let mut resp = http::Response::new(Body::from(body));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        http::header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    resp
}

fn rate_limit_error(error: GovernorError) -> http::Response<Body> {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            let mut resp =
                json_response(StatusCode::TOO_MANY_REQUESTS, i18n::t("error.rate_limited"));

            if let Some(hmap) = headers {
                for (name, value) in hmap.iter() {
                    resp.headers_mut().append(name.clone(), value.clone());
                }
            }

            // `wait_time` is in seconds
            resp.headers_mut()
                .insert(http::header::RETRY_AFTER, HeaderValue::from(wait_time));

            resp
        }
        GovernorError::UnableToExtractKey => {
            tracing::warn!("Unable to determine client IP for rate limiting");
            json_response(StatusCode::INTERNAL_SERVER_ERROR, i18n::t("error.internal"))
        }
        GovernorError::Other { code, msg, headers } => {
            let status =
                StatusCode::from_u16(code.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let mut resp = json_response(
                status,
                msg.unwrap_or_else(|| i18n::t("error.internal")),
            );
            if let Some(hmap) = headers {
                for (name, value) in hmap.iter() {
                    resp.headers_mut().append(name.clone(), value.clone());
                }
            }
            resp
        }
    }
}

/// Wrap `router` with a per-IP governor and start the thread that prunes the
/// limiter's key store. The thread exits once `shutdown` is set.
pub fn with_login_rate_limit(
    router: Router<Arc<AppState>>,
    config: &RateLimitConfig,
    shutdown: Arc<AtomicBool>,
) -> anyhow::Result<(Router<Arc<AppState>>, JoinHandle<()>)> {
    let mut builder = GovernorConfigBuilder::default().key_extractor(SmartIpKeyExtractor);
    builder.per_second(config.login_per_second.into());
    builder.burst_size(config.login_burst);
    builder.error_handler(rate_limit_error);

    let governor_conf = Arc::new(
        builder
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Failed to build login governor config"))?,
    );

    let cleaner = {
        let limiter = governor_conf.limiter().clone();
        std::thread::spawn(move || {
            let tick = Duration::from_secs(1);
            loop {
                for _ in 0..CLEANUP_INTERVAL.as_secs() {
                    if shutdown.load(Ordering::SeqCst) {
                        tracing::info!("Login rate limiter cleanup thread exiting");
                        return;
                    }
                    std::thread::sleep(tick);
                }
                tracing::debug!("login rate limiter size: {}", limiter.len());
                limiter.retain_recent();
            }
        })
    };

    let layer = GovernorLayer {
        config: governor_conf,
    };

    Ok((router.layer(layer), cleaner))
}

#[cfg(test)]
mod tests {
    use super::*;

    use http_body_util::BodyExt;

    #[tokio::test]
    async fn too_many_requests_uses_code_envelope() {
        let resp = rate_limit_error(GovernorError::TooManyRequests {
            wait_time: 3,
            headers: None,
        });
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers()[http::header::RETRY_AFTER], "3");

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 429);
        assert!(body["data"].is_null());
    }

    #[test]
    fn login_limiter_builds_and_cleanup_thread_stops() {
        let config = RateLimitConfig {
            enabled: true,
            login_per_second: 2,
            login_burst: 10,
        };
        let shutdown = Arc::new(AtomicBool::new(false));
        let (_router, cleaner) =
            with_login_rate_limit(crate::routes::auth::router(), &config, shutdown.clone())
                .unwrap();

        shutdown.store(true, Ordering::SeqCst);
        assert!(cleaner.join().is_ok());
    }

    #[test]
    fn zero_period_is_rejected() {
        let config = RateLimitConfig {
            enabled: true,
            login_per_second: 0,
            login_burst: 10,
        };
        let result = with_login_rate_limit(
            crate::routes::auth::router(),
            &config,
            Arc::new(AtomicBool::new(true)),
        );
        assert!(result.is_err());
    }
}
