//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use fund_common::{AppConfig, AppError};
use fund_db::{create_pool, PgCheerRepository, PgPledgeRepository};
use fund_live::{
    LiveChannel, LivePublisher, RedisPool, RedisPreferenceStore, SubscriberBuilder,
};
use fund_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::{AppState, EVENT_BUFFER};

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let api = apply_middleware_with_config(
        create_router(),
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    // Health probes bypass the API middleware stack
    let health = apply_middleware(health_routes());
    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = fund_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_pool = RedisPool::from_config(&config.redis)
        .map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool.clone());
    info!("Redis connection established");

    // Create repositories and adapters
    let pledge_repo = Arc::new(PgPledgeRepository::new(pool.clone()));
    let cheer_repo = Arc::new(PgCheerRepository::new(pool.clone()));
    let preference_store = Arc::new(RedisPreferenceStore::new(redis_pool.clone()));
    let publisher = Arc::new(LivePublisher::new(redis_pool));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pledge_repo(pledge_repo)
        .cheer_repo(cheer_repo)
        .preference_store(preference_store)
        .publisher(publisher)
        .campaign(config.campaign.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    // In-process insert-event fan-out, fed from the Redis subscriber
    let (events, _) = broadcast::channel(EVENT_BUFFER);
    spawn_event_forwarder(&config, events.clone()).await?;

    Ok(AppState::new(service_context, events, config).with_pools(pool, shared_redis))
}

/// Subscribe to the insert channels and forward parsed records into the
/// in-process broadcast
async fn spawn_event_forwarder(
    config: &AppConfig,
    events: broadcast::Sender<fund_core::events::InsertRecord>,
) -> Result<(), AppError> {
    let subscriber = SubscriberBuilder::new()
        .redis_url(&config.redis.url)
        .subscribe(LiveChannel::Pledges)
        .subscribe(LiveChannel::Cheers)
        .build()
        .await
        .map_err(|e| AppError::Channel(e.to_string()))?;

    let mut messages = subscriber.receiver();
    tokio::spawn(async move {
        // Keep the subscriber alive for as long as the forwarder runs
        let _subscriber = subscriber;
        loop {
            match messages.recv().await {
                Ok(message) => {
                    if let Some(record) = message.record {
                        // Send fails only when no session is listening
                        let _ = events.send(record);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event forwarder lagged behind the subscriber");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::warn!("Subscriber broadcast closed, stopping event forwarder");
                    break;
                }
            }
        }
    });

    Ok(())
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
