//! Kamala server binary.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use kamala::adapters::ai::{GeminiConfig, GeminiProvider};
use kamala::adapters::http::{api_router, AppState};
use kamala::adapters::session::InMemorySessionStore;
use kamala::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let api_key = config
        .generation
        .api_key
        .clone()
        .unwrap_or_default();
    let generator = Arc::new(GeminiProvider::new(
        GeminiConfig::new(api_key)
            .with_model(&config.generation.model)
            .with_base_url(&config.generation.base_url)
            .with_timeout(config.generation.timeout()),
    ));
    let sessions = Arc::new(InMemorySessionStore::new());

    let state = AppState::new(sessions, generator);

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        model = %config.generation.model,
        "kamala listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive CORS for the mobile client unless origins are pinned in
/// configuration.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}
