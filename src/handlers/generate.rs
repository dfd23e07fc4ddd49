use axum::{Json, extract::{Query, State}};
use std::sync::Arc;
use std::time::Instant;

use crate::error::GatewayError;
use crate::generator;
use crate::keywords;
use crate::metrics::{GENERATION_FAILURES, RATE_LIMITED, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{GenerateParams, GenerateResponse};
use crate::state::AppState;

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenerateParams>,
) -> Result<Json<GenerateResponse>, GatewayError> {
    REQUEST_TOTAL.inc();

    let result = generate(&state, params).await;
    if let Err(e) = &result {
        GENERATION_FAILURES.with_label_values(&[e.outcome()]).inc();
    }
    result.map(Json)
}

async fn generate(
    state: &AppState,
    params: GenerateParams,
) -> Result<GenerateResponse, GatewayError> {
    // rejected before touching the limiter or any model
    if params.prompt.trim().is_empty() {
        return Err(GatewayError::EmptyPrompt);
    }

    let mut requests_remaining = None;
    if let Some(limiter) = &state.rate_limiter {
        let admission = limiter.admit();
        if !admission.allowed {
            RATE_LIMITED.inc();
            tracing::warn!(wait_seconds = admission.wait_seconds, "Rate limit exceeded");
            return Err(GatewayError::RateLimited {
                wait_seconds: admission.wait_seconds,
            });
        }
        requests_remaining = Some(admission.remaining);
    }

    let start_time = Instant::now();
    let model = state.selector.select(state.provider.as_ref())?;
    let result = generator::generate(model.as_ref(), &params.prompt).await?;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    let related_gifs = if params.include_media {
        enrich(state, &params.prompt).await
    } else {
        None
    };

    Ok(GenerateResponse {
        result,
        requests_remaining,
        related_gifs,
    })
}

// GIF lookup for the prompt; any failure here leaves the response without gifs
async fn enrich(state: &AppState, prompt: &str) -> Option<Vec<crate::models::GifItem>> {
    let query = keywords::extract(prompt);
    if query.is_empty() {
        return None;
    }

    match state.gifs.search(&query).await {
        Ok(outcome) => Some(outcome.gifs),
        Err(e) => {
            tracing::warn!(
                query = %query,
                error = %e,
                "GIF enrichment failed, returning text only"
            );
            None
        }
    }
}
