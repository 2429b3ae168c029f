mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod stylist;
mod wardrobe;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::stylist::recommender::{GeminiRecommender, Recommender, SampleRecommender};
use crate::wardrobe::saved::Wardrobe;
use crate::wardrobe::store::{KeyValueStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FashionMate API v{}", env!("CARGO_PKG_VERSION"));

    let recommender = build_recommender(&config)?;
    info!("Recommender initialized (backend: {})", recommender.backend());

    let store = build_store(&config)?;
    info!(
        "Wardrobe store initialized (backend: {}, key: {})",
        store.backend(),
        config.wardrobe_key
    );

    let state = AppState {
        recommender,
        wardrobe: Wardrobe::new(store, config.wardrobe_key.clone()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Gemini when a key is configured; the sample look otherwise.
fn build_recommender(config: &Config) -> Result<Arc<dyn Recommender>> {
    match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.gemini_model.clone())?;
            info!("LLM client initialized (model: {})", llm.model());
            Ok(Arc::new(GeminiRecommender(llm)))
        }
        None => {
            warn!("GEMINI_API_KEY not set; serving the sample recommendation");
            Ok(Arc::new(SampleRecommender))
        }
    }
}

/// Redis when `REDIS_URL` is configured; process memory otherwise.
fn build_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match &config.redis_url {
        Some(url) => Ok(Arc::new(RedisStore::open(url)?)),
        None => {
            warn!("REDIS_URL not set; saved outfits live in memory and reset on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
