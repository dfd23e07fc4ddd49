use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;
use std::time::Duration;

use crate::gemini::GeminiConfig;
use crate::gif::GifSearchConfig;

pub const DEFAULT_MODELS: &str = "gemini-2.0-flash,gemini-2.5-pro,gemini-pro";

// CLI argument structure; credentials and upstream roots may come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "gemini-gateway")]
#[command(about = "Gemini text generation gateway with GIF enrichment")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    // Generative API credential, the service refuses to start without it
    #[arg(
        long,
        env = "GOOGLE_API_KEY",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub google_api_key: String,

    // Primary GIF provider credential; absent means Tenor only
    #[arg(long, env = "GIPHY_API_KEY", hide_env_values = true)]
    pub giphy_api_key: Option<String>,

    #[arg(long, env = "TENOR_API_KEY", hide_env_values = true)]
    pub tenor_api_key: Option<String>,

    // Candidate models in preference order (comma-separated)
    // Example: "gemini-2.0-flash,gemini-2.5-pro"
    #[arg(short, long, env = "GEMINI_MODELS", default_value = DEFAULT_MODELS)]
    pub models: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 2)]
    pub rate_limit: usize,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // Turn the /generate limiter off entirely
    #[arg(long, default_value_t = false)]
    pub no_rate_limit: bool,

    // Timeout for every outbound call, in seconds
    #[arg(long, default_value_t = 5)]
    pub http_timeout: u64,

    // Static page served on /home
    #[arg(long, env = "HOME_PAGE", default_value = "index.html")]
    pub home_page: PathBuf,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = crate::gemini::GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "GIPHY_BASE_URL", default_value = crate::gif::GIPHY_BASE_URL)]
    pub giphy_base_url: String,

    #[arg(long, env = "TENOR_BASE_URL", default_value = crate::gif::TENOR_BASE_URL)]
    pub tenor_base_url: String,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.google_api_key.clone(),
            base_url: self.gemini_base_url.clone(),
            timeout: self.timeout(),
        }
    }

    pub fn gif_config(&self) -> GifSearchConfig {
        GifSearchConfig {
            giphy_api_key: self.giphy_api_key.clone(),
            tenor_api_key: self.tenor_api_key.clone(),
            giphy_base_url: self.giphy_base_url.clone(),
            tenor_base_url: self.tenor_base_url.clone(),
            timeout: self.timeout(),
        }
    }
}
