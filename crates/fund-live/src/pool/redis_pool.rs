//! Redis connection pool using deadpool-redis.
//!
//! Provides a managed pool of Redis connections for efficient resource usage.

use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use std::sync::Arc;

/// Redis pool configuration
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    /// Redis connection URL (e.g., `redis://localhost:6379`)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: usize,
}

impl Default for RedisPoolConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            max_connections: 16,
        }
    }
}

impl From<&fund_common::RedisConfig> for RedisPoolConfig {
    fn from(config: &fund_common::RedisConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections as usize,
        }
    }
}

/// Error type for Redis pool operations
#[derive(Debug, thiserror::Error)]
pub enum RedisPoolError {
    #[error("Failed to create Redis pool: {0}")]
    CreatePool(String),

    #[error("Failed to get connection from pool: {0}")]
    GetConnection(#[from] deadpool_redis::PoolError),

    #[error("Redis command error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Redis pool operations
pub type RedisResult<T> = Result<T, RedisPoolError>;

/// Managed Redis connection pool
#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("status", &self.pool.status())
            .finish()
    }
}

impl RedisPool {
    /// Create a new Redis pool with the given configuration
    pub fn new(config: RedisPoolConfig) -> RedisResult<Self> {
        let cfg = Config::from_url(&config.url);
        let pool = cfg
            .builder()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?;

        // Redact credentials from URL for logging
        let safe_url = config.url.split('@').next_back().unwrap_or(&config.url);
        tracing::info!(
            url = %safe_url,
            max_connections = config.max_connections,
            "Redis pool created"
        );

        Ok(Self { pool })
    }

    /// Create a new Redis pool from fund-common config
    pub fn from_config(config: &fund_common::RedisConfig) -> RedisResult<Self> {
        Self::new(RedisPoolConfig::from(config))
    }

    /// Get a connection from the pool
    pub async fn get(&self) -> RedisResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(RedisPoolError::GetConnection)
    }

    /// Get the current pool status
    #[must_use]
    pub fn status(&self) -> deadpool_redis::Status {
        self.pool.status()
    }

    /// Check if the pool is healthy by pinging Redis
    pub async fn health_check(&self) -> RedisResult<()> {
        let mut conn = self.get().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    /// Set a string value
    pub async fn set(&self, key: &str, value: &str) -> RedisResult<()> {
        let mut conn = self.get().await?;
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    /// Get a string value by key
    pub async fn get_value(&self, key: &str) -> RedisResult<Option<String>> {
        let mut conn = self.get().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// Publish a raw payload to a channel, returning the receiver count
    pub async fn publish(&self, channel: &str, payload: &str) -> RedisResult<u32> {
        let mut conn = self.get().await?;
        let receivers: u32 = conn.publish(channel, payload).await?;
        Ok(receivers)
    }
}

/// Shared Redis pool wrapped in Arc for easy cloning
pub type SharedRedisPool = Arc<RedisPool>;

/// Create a shared Redis pool
pub fn create_shared_pool(config: RedisPoolConfig) -> RedisResult<SharedRedisPool> {
    Ok(Arc::new(RedisPool::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RedisPoolConfig::default();
        assert_eq!(config.url, "redis://127.0.0.1:6379");
        assert_eq!(config.max_connections, 16);
    }

    #[test]
    fn test_config_from_redis_config() {
        let redis_config = fund_common::RedisConfig {
            url: "redis://localhost:6380".to_string(),
            max_connections: 32,
        };
        let pool_config = RedisPoolConfig::from(&redis_config);
        assert_eq!(pool_config.url, "redis://localhost:6380");
        assert_eq!(pool_config.max_connections, 32);
    }
}
