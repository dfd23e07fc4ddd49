use crate::error::GatewayError;
use crate::gemini::TextModel;
use crate::models::GenerationResult;

/// Default back-off suggested when the upstream reports quota exhaustion.
pub const QUOTA_WAIT_SECONDS: u64 = 60;

const MAX_ERROR_CHARS: usize = 150;

/// Run `prompt` through `model` and wrap the answer.
pub async fn generate(
    model: &dyn TextModel,
    prompt: &str,
) -> Result<GenerationResult, GatewayError> {
    if prompt.trim().is_empty() {
        return Err(GatewayError::EmptyPrompt);
    }

    let preview: String = prompt.chars().take(50).collect();
    tracing::info!(model = %model.name(), prompt = %preview, "Generating content");

    match model.generate(prompt).await {
        Ok(Some(text)) if !text.is_empty() => {
            tracing::info!(model = %model.name(), chars = text.len(), "Generation succeeded");
            Ok(GenerationResult::success(model.name(), prompt, text))
        }
        Ok(_) => Err(GatewayError::EmptyUpstreamResponse),
        Err(e) => {
            let message = e.to_string();
            tracing::error!(model = %model.name(), error = %message, "Gemini API error");
            Err(classify_upstream_error(&message))
        }
    }
}

/// Best-effort mapping of opaque upstream error text onto the taxonomy.
///
/// Gemini exposes no stable error codes through this path, so this is
/// substring matching and will misfire if the upstream rewords things.
pub fn classify_upstream_error(message: &str) -> GatewayError {
    let lower = message.to_lowercase();

    if message.contains("429") || message.contains("RESOURCE_EXHAUSTED") || lower.contains("quota")
    {
        return GatewayError::QuotaExceeded {
            wait_seconds: QUOTA_WAIT_SECONDS,
        };
    }

    if message.contains("API") && (lower.contains("key") || lower.contains("auth")) {
        return GatewayError::AuthError;
    }

    GatewayError::GenerationFailed(message.chars().take(MAX_ERROR_CHARS).collect())
}
