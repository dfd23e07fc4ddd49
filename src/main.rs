use clap::Parser; // for cli
use gemini_gateway::config::Args;
use gemini_gateway::handlers::router;
use gemini_gateway::state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// this is main async function with tokio
#[tokio::main]
async fn main() -> std::io::Result<()> {
    // .env is optional, real environment wins
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments, exits when GOOGLE_API_KEY is missing
    let args = Args::parse();

    // creating shared state
    let state = AppState::from_args(&args).map_err(|e| {
        tracing::error!(error = %e, "Failed to build HTTP clients");
        std::io::Error::other(e)
    })?;

    tracing::info!(
        models = ?state.selector.candidates(),
        giphy = state.gifs.has_primary(),
        "Gemini gateway configured"
    );
    if state.rate_limiter.is_some() {
        tracing::info!(
            "Rate limit: {} requests per {} seconds",
            args.rate_limit,
            args.rate_window
        );
    } else {
        tracing::info!("Rate limiting disabled");
    }

    let app = router(Arc::new(state));

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Gateway running on http://localhost:{}", args.port);
    axum::serve(listener, app).await
}
