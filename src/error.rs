use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const API_KEY_URL: &str = "https://aistudio.google.com/apikey";

/// Everything that can end a request early. None of these are retried.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("No Gemini models available")]
    NoModelAvailable,

    #[error("Empty response from API")]
    EmptyUpstreamResponse,

    #[error("Gemini API rate limit exceeded")]
    QuotaExceeded { wait_seconds: u64 },

    #[error("API key issue")]
    AuthError,

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("{0}")]
    GifSearchFailed(String),

    #[error("Rate limit exceeded")]
    RateLimited { wait_seconds: u64 },

    #[error("Failed to list models: {0}")]
    ModelListFailed(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tip: Option<String>,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::EmptyPrompt => StatusCode::BAD_REQUEST,
            GatewayError::NoModelAvailable => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::QuotaExceeded { .. } | GatewayError::RateLimited { .. } => {
                StatusCode::TOO_MANY_REQUESTS
            }
            GatewayError::AuthError => StatusCode::UNAUTHORIZED,
            GatewayError::EmptyUpstreamResponse
            | GatewayError::GenerationFailed(_)
            | GatewayError::GifSearchFailed(_)
            | GatewayError::ModelListFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Short label used for metrics
    pub fn outcome(&self) -> &'static str {
        match self {
            GatewayError::EmptyPrompt => "empty_prompt",
            GatewayError::NoModelAvailable => "no_model_available",
            GatewayError::EmptyUpstreamResponse => "empty_upstream_response",
            GatewayError::QuotaExceeded { .. } => "quota_exceeded",
            GatewayError::AuthError => "auth_error",
            GatewayError::GenerationFailed(_) => "generation_failed",
            GatewayError::GifSearchFailed(_) => "gif_search_failed",
            GatewayError::RateLimited { .. } => "rate_limited",
            GatewayError::ModelListFailed(_) => "model_list_failed",
        }
    }

    fn body(&self) -> ErrorBody {
        let mut body = ErrorBody {
            status: "error",
            error: self.to_string(),
            wait_seconds: None,
            message: None,
            tip: None,
        };

        match self {
            GatewayError::QuotaExceeded { wait_seconds } => {
                body.status = "quota_exceeded";
                body.wait_seconds = Some(*wait_seconds);
                body.message = Some(format!(
                    "Google's free tier has strict limits. Please wait {} seconds.",
                    wait_seconds
                ));
                body.tip = Some(format!(
                    "Get a new API key from {} or upgrade your quota",
                    API_KEY_URL
                ));
            }
            GatewayError::RateLimited { wait_seconds } => {
                body.status = "rate_limited";
                body.wait_seconds = Some(*wait_seconds);
                body.message = Some(format!(
                    "Too many requests. Please wait {} seconds before trying again.",
                    wait_seconds
                ));
            }
            GatewayError::AuthError => {
                body.message = Some(format!(
                    "Your Google API key may be invalid. Get a new one from {}",
                    API_KEY_URL
                ));
            }
            _ => {}
        }

        body
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
