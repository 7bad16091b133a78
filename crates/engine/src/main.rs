//! Title Battle Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use titlebattle_engine::infrastructure::{
    ollama::OllamaClient,
    ports::{LlmPort, ProfileRepo},
    profiles::InMemoryProfileRepo,
    resilient_llm::{ResilientLlmClient, RetryConfig},
};
use titlebattle_engine::{api, App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "titlebattle_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Title Battle Engine");

    let config = EngineConfig::from_env();
    tracing::info!(
        ollama_url = %config.ollama_url,
        model = %config.ollama_model,
        k_factor = config.rules.k_factor,
        cooldown_secs = config.rules.cooldown_secs,
        "Configuration loaded"
    );

    let ollama: Arc<dyn LlmPort> = Arc::new(OllamaClient::with_timeout(
        &config.ollama_url,
        &config.ollama_model,
        config.llm_timeout_secs,
    ));
    let llm: Arc<dyn LlmPort> = if config.llm_max_retries > 0 {
        let retry_config = RetryConfig::default().with_max_retries(config.llm_max_retries);
        tracing::info!(
            "LLM client configured with retry: max_retries={}, base_delay_ms={}",
            retry_config.max_retries,
            retry_config.base_delay_ms
        );
        Arc::new(ResilientLlmClient::new(ollama, retry_config))
    } else {
        ollama
    };

    let profiles: Arc<dyn ProfileRepo> = Arc::new(InMemoryProfileRepo::new());
    let app = Arc::new(App::new(llm, profiles, config.rules));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    // Browsers preflight the JSON bodies the client posts.
    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
