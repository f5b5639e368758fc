//! Event publisher port
//!
//! Services publish insert events through this seam after a confirmed write.
//! Publish failures degrade to "no live updates" for other sessions and must
//! never fail the write they follow, so implementations log and swallow
//! transport errors.

use async_trait::async_trait;

use crate::entities::{Cheer, Pledge};

#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Announce a confirmed pledge insert
    async fn pledge_recorded(&self, pledge: &Pledge);

    /// Announce a confirmed cheer insert
    async fn cheer_posted(&self, cheer: &Cheer);
}
