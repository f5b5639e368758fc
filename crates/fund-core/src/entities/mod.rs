//! Domain entities - the store-owned records and the fixed reward catalogue

mod cheer;
mod pledge;
mod tier;

pub use cheer::Cheer;
pub use pledge::Pledge;
pub use tier::{RewardTier, TIER_CATALOGUE};
