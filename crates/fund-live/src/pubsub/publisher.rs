//! Redis Pub/Sub publisher.
//!
//! Publishes insert events to Redis channels for distribution to live
//! sessions. Implements the `EventPublisher` port: publish failures are
//! logged and swallowed so they never fail the write they follow.

use async_trait::async_trait;

use fund_core::entities::{Cheer, Pledge};
use fund_core::events::DomainEvent;
use fund_core::traits::EventPublisher;

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::LiveChannel;

/// Redis Pub/Sub publisher for insert events
#[derive(Clone)]
pub struct LivePublisher {
    pool: RedisPool,
}

impl LivePublisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to its collection channel
    pub async fn publish(&self, event: &DomainEvent) -> RedisResult<u32> {
        let channel = match event {
            DomainEvent::PledgeRecorded(_) => LiveChannel::Pledges,
            DomainEvent::CheerPosted(_) => LiveChannel::Cheers,
        };
        let payload = serde_json::to_string(event)?;

        let receivers = self.pool.publish(channel.name(), &payload).await?;

        tracing::debug!(
            channel = %channel,
            event_type = %event.event_type(),
            receivers = receivers,
            "Published insert event"
        );

        Ok(receivers)
    }

    async fn publish_lossy(&self, event: DomainEvent) {
        if let Err(e) = self.publish(&event).await {
            tracing::warn!(
                event_type = %event.event_type(),
                error = %e,
                "Failed to publish insert event; live sessions will miss it"
            );
        }
    }
}

#[async_trait]
impl EventPublisher for LivePublisher {
    async fn pledge_recorded(&self, pledge: &Pledge) {
        self.publish_lossy(DomainEvent::PledgeRecorded(pledge.clone()))
            .await;
    }

    async fn cheer_posted(&self, cheer: &Cheer) {
        self.publish_lossy(DomainEvent::CheerPosted(cheer.clone()))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fund_core::value_objects::{PaymentId, PaymentMethod, PledgeId};

    #[test]
    fn test_event_routing_and_serialization() {
        let pledge = Pledge::new(
            PledgeId::new(1),
            50_000,
            "Early Bird Ticket".to_string(),
            "010-1234-5678".to_string(),
            PaymentId::generate(PaymentMethod::Card, Utc::now()),
        );
        let event = DomainEvent::PledgeRecorded(pledge);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("PLEDGE_RECORDED"));
        assert!(json.contains("50000"));
    }
}
