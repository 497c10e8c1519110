//! Router configuration: routes plus trace and CORS middleware.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;

/// Create the application router with all routes and middleware.
pub fn create_router() -> Router {
    // Permissive CORS so a browser-hosted client on another origin can call in.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/count-numbers", get(handlers::count_numbers))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
