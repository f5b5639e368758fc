//! Live cheer feed session
//!
//! Holds a `CheerFeed` projection and prepends cheer insert events as they
//! arrive. An event whose `client_ref` matches a pending local submission is
//! the echo of our own optimistic prepend and is suppressed.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

use fund_core::entities::Cheer;
use fund_core::events::InsertRecord;
use fund_core::projection::CheerFeed;

use crate::dto::CheerResponse;

/// Shared live view of the cheer wall
#[derive(Clone)]
pub struct LiveCheerFeed {
    state: Arc<RwLock<CheerFeed>>,
}

impl LiveCheerFeed {
    /// Wrap a seeded feed projection
    #[must_use]
    pub fn new(feed: CheerFeed) -> Self {
        Self {
            state: Arc::new(RwLock::new(feed)),
        }
    }

    /// Apply insert events until the receiver closes
    pub async fn run(&self, mut events: broadcast::Receiver<InsertRecord>) {
        loop {
            match events.recv().await {
                Ok(InsertRecord::Cheer(cheer)) => {
                    let applied = self.state.write().await.apply(cheer);
                    if !applied {
                        debug!("Suppressed optimistic echo");
                    }
                }
                Ok(InsertRecord::Pledge(_)) => {}
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed = missed, "Cheer feed lagged behind event stream");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Event stream closed; cheer feed ending");
                    break;
                }
            }
        }
    }

    /// Prepend a locally submitted cheer, registering its correlation id so
    /// the subscription echo is suppressed
    pub async fn push_local(&self, cheer: Cheer) {
        self.state.write().await.push_local(cheer);
    }

    /// Prepend a local fallback cheer (store write failed, no echo expected)
    pub async fn push_fallback(&self, cheer: Cheer) {
        self.state.write().await.push_fallback(cheer);
    }

    /// Current feed, newest first
    pub async fn cheers(&self) -> Vec<CheerResponse> {
        let now = Utc::now();
        self.state
            .read()
            .await
            .cheers()
            .iter()
            .map(|cheer| CheerResponse::from_cheer(cheer, now))
            .collect()
    }
}
