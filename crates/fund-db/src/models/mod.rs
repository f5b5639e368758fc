//! Database models (SQLx row types)

mod cheer;
mod pledge;

pub use cheer::CheerModel;
pub use pledge::{FundingTotalsRow, PledgeModel};
