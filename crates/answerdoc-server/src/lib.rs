//! answerdoc-server
//!
//! HTTP surface: chat pages, question forwarding, and answer downloads.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router with all routes and layers attached.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Pages
        .route("/", get(routes::pages::landing))
        .route("/chatbot", get(routes::pages::chatbot))
        .route("/docqa", get(routes::pages::docqa))
        .route("/comingsoon", get(routes::pages::coming_soon))
        // API
        .route("/ask", post(routes::ask::ask))
        .route("/models", get(routes::models::list_available_models))
        .route("/download-doc", post(routes::download::download_doc))
        .route("/download-pdf", post(routes::download::download_pdf))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
