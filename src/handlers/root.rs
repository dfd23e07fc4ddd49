use axum::{Json, response::IntoResponse};

// service metadata
pub async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Gemini API Integration",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "/home": "Web interface",
            "/generate": "Generate content",
            "/search-gif": "Search GIFs",
            "/models": "List and probe Gemini models",
            "/health": "Health check",
            "/metrics": "Prometheus metrics"
        }
    }))
}
