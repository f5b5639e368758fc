//! PostgreSQL repository implementations

pub mod error;

mod cheer;
mod pledge;

pub use cheer::PgCheerRepository;
pub use pledge::PgPledgeRepository;
