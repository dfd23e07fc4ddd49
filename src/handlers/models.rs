use axum::{Json, extract::State};
use std::sync::Arc;

use crate::error::GatewayError;
use crate::models::{ModelProbe, ModelsResponse, ProbeStatus};
use crate::state::AppState;

const PROBE_PROMPT: &str = "Hello";

// Lists upstream models, then tries a trivial generation on each candidate
pub async fn models_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ModelsResponse>, GatewayError> {
    let available_models = state.provider.list_models().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list Gemini models");
        GatewayError::ModelListFailed(e.to_string())
    })?;

    let mut tested_models = Vec::with_capacity(state.selector.candidates().len());
    for name in state.selector.candidates() {
        let outcome = match state.provider.model(name) {
            Ok(model) => match model.generate(PROBE_PROMPT).await {
                Ok(Some(text)) if !text.is_empty() => Ok(()),
                Ok(_) => Err("Empty response from API".to_string()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(e.to_string()),
        };

        let probe = match outcome {
            Ok(()) => ModelProbe {
                model: name.clone(),
                status: ProbeStatus::Working,
                error: None,
            },
            Err(error) => {
                tracing::info!(model = %name, error = %error, "Model probe failed");
                ModelProbe {
                    model: name.clone(),
                    status: ProbeStatus::NotWorking,
                    error: Some(error.chars().take(150).collect()),
                }
            }
        };
        tested_models.push(probe);
    }

    let working_models = tested_models
        .iter()
        .filter(|p| p.status == ProbeStatus::Working)
        .map(|p| p.model.clone())
        .collect();

    Ok(Json(ModelsResponse {
        status: "success".to_string(),
        available_models,
        tested_models,
        working_models,
    }))
}
