pub mod analysis;
pub mod api;
pub mod catalog;
pub mod completion;
pub mod config;

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use analysis::SymptomAnalyzer;
use config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: SymptomAnalyzer,
}

impl AppState {
    pub fn new(analyzer: SymptomAnalyzer) -> Arc<Self> {
        Arc::new(Self { analyzer })
    }

    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        Self::new(SymptomAnalyzer::new(config.completion()))
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Any origin may call the API; pre-flight requests get an empty 200.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await
}
