use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use company_insight::app;
use company_insight::config::AppConfig;
use company_insight::external::analytics_api::AnalyticsApiClient;
use company_insight::logging::{init_logging, LoggingConfig};
use company_insight::services::cache_gateway::CacheGateway;
use company_insight::services::cache_store::{CacheStore, MemoryStore, RedisStore};
use company_insight::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env().context("invalid configuration")?;

    let store: Arc<dyn CacheStore> = match &config.redis_url {
        Some(url) => Arc::new(
            RedisStore::connect(url)
                .await
                .context("failed to connect to Redis")?,
        ),
        None => {
            tracing::warn!("REDIS_URL not set, using in-process cache store");
            let store = MemoryStore::new();
            let _sweeper = store.spawn_cleanup(config.cache_ttl);
            Arc::new(store)
        }
    };

    let origin = AnalyticsApiClient::new(&config.origin_base_url, config.origin_timeout)
        .context("failed to build analytics client")?;
    tracing::info!("Analytics origin: {}", origin.endpoint());

    let state = AppState {
        gateway: CacheGateway::new(store, Arc::new(origin), config.cache_ttl),
    };
    let app = app::create_app(state, config.cors_allow_origin.as_deref());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Company insight backend running at http://{}/", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down, cache store connection released");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
