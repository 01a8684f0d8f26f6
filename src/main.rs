use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use http::{HeaderValue, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod i18n;
mod middleware;
mod routes;
mod services;
mod store;

use config::Config;
use store::Store;

pub struct AppState {
    pub store: Store,
    pub config: Config,
}

fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            http::header::CONTENT_TYPE,
            http::header::AUTHORIZATION,
            http::HeaderName::from_static("x-requested-with"),
        ]);

    // Credentials cannot be combined with a wildcard origin.
    if origin == "*" {
        Ok(layer.allow_origin(Any))
    } else {
        let origin = origin
            .parse::<HeaderValue>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS_ORIGIN {}: {}", origin, e))?;
        Ok(layer.allow_origin(origin).allow_credentials(true))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "live_debate_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    i18n::init(&config.lang);

    tracing::info!("Starting live debate admin backend");
    tracing::info!(
        "Media server: {} (HLS port {}, RTMP port {})",
        config.streaming.server_ip,
        config.streaming.hls_port,
        config.streaming.rtmp_port
    );

    let store = Store::seeded()?;
    let app_state = Arc::new(AppState {
        store,
        config: config.clone(),
    });

    let thread_shutdown = Arc::new(AtomicBool::new(false));

    let (auth_router, login_cleaner) = if config.rate_limit.enabled {
        let (router, cleaner) = middleware::rate_limit::with_login_rate_limit(
            routes::auth::router(),
            &config.rate_limit,
            thread_shutdown.clone(),
        )?;
        (router, Some(cleaner))
    } else {
        tracing::warn!("Login rate limiting is disabled");
        (routes::auth::router(), None)
    };

    // Build router
    let app = routes::api_router(auth_router)
        .with_state(app_state)
        .layer(axum::middleware::from_fn(
            middleware::request_log::request_log_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.cors_origin)?);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let server_fut = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    );

    let thread_shutdown_clone = thread_shutdown.clone();
    let signal_fut = async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut term) => {
                    tokio::select! {
                        _ = ctrl_c => {},
                        _ = term.recv() => {},
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to bind SIGTERM: {}", e);
                    let _ = ctrl_c.await;
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
        }

        tracing::info!("Shutdown signal received");
        thread_shutdown_clone.store(true, Ordering::SeqCst);
    };

    tokio::select! {
        res = server_fut => {
            if let Err(e) = res {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = signal_fut => {
            tracing::info!("Server stopped accepting new connections");
        }
    }

    // The cleanup thread polls the flag once per second.
    thread_shutdown.store(true, Ordering::SeqCst);
    if let Some(cleaner) = login_cleaner {
        if let Err(e) = cleaner.join() {
            tracing::warn!("Login rate limiter cleanup thread join failed: {:?}", e);
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_wildcard_and_specific_origins() {
        assert!(cors_layer("*").is_ok());
        assert!(cors_layer("https://admin.example.com").is_ok());
        assert!(cors_layer("bad\norigin").is_err());
    }
}
