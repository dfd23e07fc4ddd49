use axum::{Json, extract::{Query, State}};
use std::sync::Arc;

use crate::error::GatewayError;
use crate::models::{SearchOutcome, SearchParams};
use crate::state::AppState;

// An empty query is forwarded as-is; the providers decide what it means
pub async fn search_gif_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchOutcome>, GatewayError> {
    state.gifs.search(&params.query).await.map(Json)
}
