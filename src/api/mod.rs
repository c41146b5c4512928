use axum::{Router, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::search_backend::SearchBackend;

pub mod handlers;
pub mod models;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn SearchBackend>,
    pub site_name: Arc<str>,
}

impl AppState {
    pub fn new(backend: Arc<dyn SearchBackend>, site_name: &str) -> Self {
        Self {
            backend,
            site_name: Arc::from(site_name),
        }
    }
}

pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/query", get(handlers::query_handler))
        .with_state(state)
        // Stylesheets and other assets for the rendered pages
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
