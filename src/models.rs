use serde::{Deserialize, Serialize};

// /generate query string
#[derive(Deserialize, Debug, Clone)]
pub struct GenerateParams {
    pub prompt: String,
    #[serde(default)]
    pub include_media: bool,
}

// /search-gif query string
#[derive(Deserialize, Debug, Clone)]
pub struct SearchParams {
    pub query: String,
}

// Successful generation; `idea` mirrors `output` for older clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub status: String,
    pub model_used: String,
    pub prompt: String,
    pub output: String,
    pub idea: String,
}

impl GenerationResult {
    pub fn success(model_used: &str, prompt: &str, text: String) -> Self {
        Self {
            status: "success".to_string(),
            model_used: model_used.to_string(),
            prompt: prompt.to_string(),
            output: text.clone(),
            idea: text,
        }
    }
}

// Full /generate body
#[derive(Serialize, Debug, Clone)]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub result: GenerationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_remaining: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_gifs: Option<Vec<GifItem>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GifSource {
    Giphy,
    Tenor,
}

// One search hit, same shape whichever provider produced it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GifItem {
    pub url: String,
    pub title: String,
    pub source: GifSource,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub status: String,
    pub query: String,
    pub gifs: Vec<GifItem>,
    pub count: usize,
}

impl SearchOutcome {
    pub fn success(query: &str, gifs: Vec<GifItem>) -> Self {
        Self {
            status: "success".to_string(),
            query: query.to_string(),
            count: gifs.len(),
            gifs,
        }
    }
}

// /models probe result for one candidate
#[derive(Serialize, Debug, Clone)]
pub struct ModelProbe {
    pub model: String,
    pub status: ProbeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    Working,
    NotWorking,
}

#[derive(Serialize, Debug, Clone)]
pub struct ModelsResponse {
    pub status: String,
    pub available_models: Vec<String>,
    pub tested_models: Vec<ModelProbe>,
    pub working_models: Vec<String>,
}
