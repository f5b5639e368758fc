//! Live session projections
//!
//! Bind the baseline projections from `fund-core` to a stream of insert
//! events. Each session owns a `broadcast::Receiver`; the run loop applies
//! deltas until the receiver closes, and dropping the session drops the
//! subscription.

mod cheer_feed;
mod funding;

pub use cheer_feed::LiveCheerFeed;
pub use funding::LiveFunding;
