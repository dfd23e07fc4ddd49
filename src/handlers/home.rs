use axum::{extract::State, http::StatusCode, response::{Html, IntoResponse, Response}};
use std::sync::Arc;

use crate::state::AppState;

pub async fn home_handler(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read_to_string(&state.home_page).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::warn!(path = %state.home_page.display(), error = %e, "Home page unavailable");
            let name = state
                .home_page
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "home page".to_string());
            (
                StatusCode::NOT_FOUND,
                Html(format!("<h1>Error: {} not found</h1>", name)),
            )
                .into_response()
        }
    }
}
