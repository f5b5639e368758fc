//! # fund-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `fund-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Both collections are insert-only: rows are never updated or deleted in
//! normal operation, which keeps the aggregate queries simple.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fund_db::pool::{create_pool, DatabaseConfig};
//! use fund_db::repositories::PgPledgeRepository;
//! use fund_core::traits::PledgeRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let pledge_repo = PgPledgeRepository::new(pool);
//!
//!     let snapshot = pledge_repo.sum_amounts().await?;
//!     println!("raised so far: {}", snapshot.total);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgCheerRepository, PgPledgeRepository};
