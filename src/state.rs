use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Args;
use crate::gemini::{GeminiClient, ModelProvider};
use crate::gif::GifSearchClient;
use crate::rate_limit::SlidingWindowLimiter;
use crate::selector::ModelSelector;

// app's shared state

pub struct AppState {
    pub provider: Arc<dyn ModelProvider>,
    pub selector: ModelSelector,
    pub gifs: GifSearchClient,
    pub rate_limiter: Option<SlidingWindowLimiter>, // None when limiting is switched off
    pub home_page: PathBuf,
}

impl AppState {
    pub fn from_args(args: &Args) -> Result<Self, reqwest::Error> {
        let provider: Arc<dyn ModelProvider> = Arc::new(GeminiClient::new(args.gemini_config())?);
        let rate_limiter = (!args.no_rate_limit).then(|| {
            SlidingWindowLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window))
        });

        Ok(Self {
            provider,
            selector: ModelSelector::from_list(&args.models),
            gifs: GifSearchClient::new(args.gif_config())?,
            rate_limiter,
            home_page: args.home_page.clone(),
        })
    }
}
