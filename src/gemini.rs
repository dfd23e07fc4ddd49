//! Upstream generative-text client.
//!
//! `ModelProvider` hands out live `TextModel` handles by identifier; the
//! Gemini REST API is the only real implementation, tests plug in fakes.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid model identifier: {0:?}")]
    InvalidModel(String),

    // Display keeps the status line and raw body: callers pattern-match on it
    #[error("{status} {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Request failed: {0}")]
    Network(reqwest::Error),
}

// Request URLs can carry credentials, keep them out of anything we display
impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Network(e.without_url())
    }
}

/// A model handle that can answer a single prompt.
#[async_trait]
pub trait TextModel: Send + Sync {
    fn name(&self) -> &str;

    /// `Ok(None)` means the upstream answered but produced no text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}

#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Instantiate a handle for `name`. Cheap, performs no network call.
    fn model(&self, name: &str) -> Result<Arc<dyn TextModel>, ProviderError>;

    /// Names of the upstream models that support content generation.
    async fn list_models(&self) -> Result<Vec<String>, ProviderError>;
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Arc<str>,
    base_url: Arc<str>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.into(),
            base_url: config.base_url.trim_end_matches('/').into(),
        })
    }
}

// Model ids are path segments, so only allow what Gemini names actually use
fn valid_model_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
}

#[async_trait]
impl ModelProvider for GeminiClient {
    fn model(&self, name: &str) -> Result<Arc<dyn TextModel>, ProviderError> {
        if !valid_model_name(name) {
            return Err(ProviderError::InvalidModel(name.to_string()));
        }
        Ok(Arc::new(GeminiModel {
            inner: self.clone(),
            name: name.to_string(),
        }))
    }

    async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/v1beta/models", self.base_url);
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .header(API_KEY_HEADER, &*self.api_key)
                .query(&[("pageSize", "50")]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(ProviderError::Api { status, body });
            }

            let page: ListModelsResponse = response.json().await?;
            names.extend(
                page.models
                    .into_iter()
                    .filter(|m| {
                        m.supported_generation_methods
                            .iter()
                            .any(|method| method == "generateContent")
                    })
                    .map(|m| m.name.trim_start_matches("models/").to_string()),
            );

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(names)
    }
}

pub struct GeminiModel {
    inner: GeminiClient,
    name: String,
}

#[async_trait]
impl TextModel for GeminiModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.inner.base_url, self.name
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.name,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .inner
            .client
            .post(&url)
            .header(API_KEY_HEADER, &*self.inner.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(body.text())
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    // Concatenate the text parts of the first candidate
    fn text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}
