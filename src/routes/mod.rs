pub mod auth;
pub mod debate;
pub mod envelope;
pub mod health;
pub mod statistics;
pub mod streams;
pub mod users;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

/// Build the `/api` tree. `auth_router` is passed in so the caller can layer
/// rate limiting onto the login route only.
pub fn api_router(auth_router: Router<Arc<AppState>>) -> Router<Arc<AppState>> {
    let admin = debate::router()
        .merge(streams::router())
        .merge(users::router())
        .merge(auth_router);

    // The v1 prefix only exposes the debate and stream routes.
    let admin_v1 = debate::router().merge(streams::router());

    let api = Router::new()
        .nest("/admin", admin)
        .nest("/v1/admin", admin_v1)
        .route("/v1/debate-topic", get(debate::public_topic))
        .merge(statistics::router())
        .route("/health", get(health::health_check));

    Router::new().nest("/api", api)
}
