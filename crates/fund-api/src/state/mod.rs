//! Application state
//!
//! Holds the shared state for the Axum application: the service context, the
//! insert-event broadcast, and configuration.

use std::sync::Arc;

use tokio::sync::broadcast;

use fund_common::AppConfig;
use fund_core::events::InsertRecord;
use fund_db::PgPool;
use fund_live::SharedRedisPool;
use fund_service::ServiceContext;

/// Buffer size for the in-process insert-event broadcast
pub const EVENT_BUFFER: usize = 1024;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// In-process fan-out of insert events (fed by the Redis subscriber)
    events: broadcast::Sender<InsertRecord>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Database pool, kept for readiness probes; absent for in-memory wiring
    db_pool: Option<PgPool>,
    /// Redis pool, kept for readiness probes; absent for in-memory wiring
    redis_pool: Option<SharedRedisPool>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        events: broadcast::Sender<InsertRecord>,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            events,
            config: Arc::new(config),
            db_pool: None,
            redis_pool: None,
        }
    }

    /// Attach backing pools so readiness probes can check them
    #[must_use]
    pub fn with_pools(mut self, db_pool: PgPool, redis_pool: SharedRedisPool) -> Self {
        self.db_pool = Some(db_pool);
        self.redis_pool = Some(redis_pool);
        self
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Subscribe to the insert-event broadcast
    pub fn subscribe_events(&self) -> broadcast::Receiver<InsertRecord> {
        self.events.subscribe()
    }

    /// Get the insert-event sender (used by the subscriber forwarder)
    pub fn events(&self) -> &broadcast::Sender<InsertRecord> {
        &self.events
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the database pool, if wired
    pub fn db_pool(&self) -> Option<&PgPool> {
        self.db_pool.as_ref()
    }

    /// Get the Redis pool, if wired
    pub fn redis_pool(&self) -> Option<&SharedRedisPool> {
        self.redis_pool.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
