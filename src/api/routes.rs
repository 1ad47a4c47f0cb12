//! Route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::handlers::AppState;

/// Create the chat page router
pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::chat_page))
        .with_state(state)
}

/// Create JSON API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Chat endpoints
        .route("/chat", post(handlers::chat))
        .route("/history", get(handlers::history))
        .with_state(state)
}

/// Full application: page at `/`, JSON API under `/api`, with tracing and
/// compression, and permissive CORS when enabled
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .merge(page_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}
