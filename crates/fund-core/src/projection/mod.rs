//! Session projections - derived, eventually-consistent views of the store
//!
//! A projection is seeded by one bulk read and then folded forward by insert
//! events from the push channel. It is owned exclusively by its view session
//! and discarded on teardown; all mutation happens on the single event-loop
//! thread, so no interior locking is needed here.

mod cheer_feed;
mod funding;

pub use cheer_feed::{fallback_cheers, CheerFeed};
pub use funding::{FundingSession, FundingSnapshot};
