//! HTTP server and routes.

mod handlers;
mod state;

pub use state::{AppState, BrowseSession};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/books", get(handlers::api_books))
        .route("/books/{id}", get(handlers::api_book_preview));

    Router::new()
        .route("/", get(handlers::index))
        .route("/books/{id}", get(handlers::book_detail))
        .route("/search", post(handlers::search))
        .route("/list/more", post(handlers::show_more))
        .route("/settings", post(handlers::settings))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
