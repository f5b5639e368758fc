//! # fund-live
//!
//! Redis-backed live layer: insert-event pub/sub and preference storage.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Pub/Sub**: Insert-event distribution across server instances
//! - **Preferences**: Persisted UI preferences (theme) behind the
//!   `PreferenceStore` port
//!
//! ## Example
//!
//! ```ignore
//! use fund_live::{RedisPool, RedisPoolConfig, LivePublisher, LiveChannel};
//!
//! // Create Redis pool
//! let config = RedisPoolConfig::default();
//! let pool = RedisPool::new(config)?;
//!
//! // Publish a confirmed insert
//! let publisher = LivePublisher::new(pool.clone());
//! publisher.pledge_recorded(&pledge).await;
//! ```

pub mod pool;
pub mod prefs;
pub mod pubsub;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export pubsub types
pub use pubsub::{
    LiveChannel, LivePublisher, ReceivedMessage, Subscriber, SubscriberBuilder, SubscriberConfig,
    SubscriberError, SubscriberResult, CHEERS_CHANNEL, PLEDGES_CHANNEL,
};

// Re-export preference store
pub use prefs::RedisPreferenceStore;
