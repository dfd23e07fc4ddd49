mod generate;
mod health;
mod home;
mod metrics;
mod models;
mod root;
mod search_gif;

pub use generate::generate_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use metrics::metrics_handler;
pub use models::models_handler;
pub use root::root_handler;
pub use search_gif::search_gif_handler;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

// creating the router with routes
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/home", get(home_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/models", get(models_handler))
        .route("/search-gif", get(search_gif_handler))
        .route("/generate", get(generate_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
