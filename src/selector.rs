use std::sync::Arc;

use crate::error::GatewayError;
use crate::gemini::{ModelProvider, TextModel};

/// Ordered model candidates, most preferred first.
#[derive(Debug, Clone)]
pub struct ModelSelector {
    candidates: Vec<String>,
}

impl ModelSelector {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    // Create from comma-separated names "gemini-2.0-flash, gemini-pro"
    pub fn from_list(list: &str) -> Self {
        let candidates = list
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { candidates }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// First candidate the provider can instantiate. Each name is tried once.
    pub fn select(
        &self,
        provider: &dyn ModelProvider,
    ) -> Result<Arc<dyn TextModel>, GatewayError> {
        for name in &self.candidates {
            match provider.model(name) {
                Ok(model) => return Ok(model),
                Err(e) => {
                    tracing::warn!(model = %name, error = %e, "Model unavailable, trying next");
                }
            }
        }
        Err(GatewayError::NoModelAvailable)
    }
}
