//! Entity ↔ model mappers

mod cheer;
mod pledge;

pub use cheer::CheerInsert;
pub use pledge::PledgeInsert;
