//! Live funding session
//!
//! Holds a `FundingSession` projection and folds pledge insert events into
//! it as they arrive. Events at or below the baseline cursor are skipped by
//! the projection, so a delta published between the bulk read and the
//! subscription start is never double counted.

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

use fund_core::events::InsertRecord;
use fund_core::projection::FundingSession;

use crate::dto::FundingResponse;

/// Shared live view of the running total
#[derive(Clone)]
pub struct LiveFunding {
    state: Arc<RwLock<FundingSession>>,
}

impl LiveFunding {
    /// Wrap a seeded session projection
    #[must_use]
    pub fn new(session: FundingSession) -> Self {
        Self {
            state: Arc::new(RwLock::new(session)),
        }
    }

    /// Apply insert events until the receiver closes
    ///
    /// A lagged receiver logs and keeps going; the events it missed are lost
    /// to this session, matching the at-most-once push channel.
    pub async fn run(&self, mut events: broadcast::Receiver<InsertRecord>) {
        loop {
            match events.recv().await {
                Ok(InsertRecord::Pledge(pledge)) => {
                    let applied = self.state.write().await.apply(&pledge);
                    if applied {
                        debug!(pledge_id = %pledge.id, amount = pledge.amount, "Applied pledge delta");
                    } else {
                        debug!(pledge_id = %pledge.id, "Skipped pledge delta at or below cursor");
                    }
                }
                Ok(InsertRecord::Cheer(_)) => {}
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed = missed, "Funding session lagged behind event stream");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Event stream closed; funding session ending");
                    break;
                }
            }
        }
    }

    /// Current running total
    pub async fn total(&self) -> i64 {
        self.state.read().await.total()
    }

    /// Current gauge state
    pub async fn snapshot(&self) -> FundingResponse {
        FundingResponse::from_session(&*self.state.read().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fund_core::entities::Pledge;
    use fund_core::projection::FundingSnapshot;
    use fund_core::value_objects::{PaymentId, PaymentMethod, PledgeId};

    fn pledge(id: i64, amount: i64) -> Pledge {
        Pledge::new(
            PledgeId::new(id),
            amount,
            "Early Bird Ticket".to_string(),
            "010-1234-5678".to_string(),
            PaymentId::generate(PaymentMethod::Card, Utc::now()),
        )
    }

    #[tokio::test]
    async fn test_deltas_fold_in_delivery_order() {
        let session = FundingSession::new(
            FundingSnapshot {
                total: 170_000,
                cursor: Some(PledgeId::new(2)),
            },
            1_000_000,
        );
        let live = LiveFunding::new(session);

        let (tx, rx) = broadcast::channel(16);
        let runner = {
            let live = live.clone();
            tokio::spawn(async move { live.run(rx).await })
        };

        tx.send(InsertRecord::Pledge(pledge(3, 300_000))).unwrap();
        drop(tx);
        runner.await.unwrap();

        assert_eq!(live.total().await, 470_000);
        assert_eq!(live.snapshot().await.percent, 47);
    }

    #[tokio::test]
    async fn test_event_at_cursor_not_recounted() {
        let session = FundingSession::new(
            FundingSnapshot {
                total: 170_000,
                cursor: Some(PledgeId::new(2)),
            },
            1_000_000,
        );
        let live = LiveFunding::new(session);

        let (tx, rx) = broadcast::channel(16);
        let runner = {
            let live = live.clone();
            tokio::spawn(async move { live.run(rx).await })
        };

        // Already included in the baseline
        tx.send(InsertRecord::Pledge(pledge(2, 120_000))).unwrap();
        tx.send(InsertRecord::Pledge(pledge(3, 50_000))).unwrap();
        drop(tx);
        runner.await.unwrap();

        assert_eq!(live.total().await, 220_000);
    }

    #[tokio::test]
    async fn test_cheer_events_ignored() {
        let live = LiveFunding::new(FundingSession::new(FundingSnapshot::empty(), 1_000_000));

        let (tx, rx) = broadcast::channel(16);
        let runner = {
            let live = live.clone();
            tokio::spawn(async move { live.run(rx).await })
        };

        let cheer = fund_core::entities::Cheer::compose(
            "Ji-Soo".to_string(),
            "Fighting!".to_string(),
            fund_core::value_objects::AVATAR_PALETTE[0],
        );
        tx.send(InsertRecord::Cheer(cheer)).unwrap();
        drop(tx);
        runner.await.unwrap();

        assert_eq!(live.total().await, 0);
    }
}
