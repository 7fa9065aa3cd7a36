use medassist_service::{build_app, config::AppConfig, run_server, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    if config.api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; symptom analysis will return 500");
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.completion_model,
        endpoint = %config.completion_url,
        "starting medassist-service"
    );

    let app = build_app(AppState::from_config(&config));
    run_server(app, config.port).await
}
