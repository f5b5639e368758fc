//! Domain events - insert notifications for the push channel
//!
//! Both collections are insert-only from this service, so the whole event
//! vocabulary is "a row was inserted". The full record travels with the event;
//! no acknowledgment or replay cursor is negotiated.

use serde::{Deserialize, Serialize};

use crate::entities::{Cheer, Pledge};

/// Collection name for pledge inserts
pub const PLEDGES_COLLECTION: &str = "pledges";
/// Collection name for cheer inserts
pub const CHEERS_COLLECTION: &str = "cheers";

/// Domain event emitted after a confirmed insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", content = "record", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    PledgeRecorded(Pledge),
    CheerPosted(Cheer),
}

impl DomainEvent {
    /// Event type name for logging and wire framing
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PledgeRecorded(_) => "PLEDGE_RECORDED",
            Self::CheerPosted(_) => "CHEER_POSTED",
        }
    }

    /// Collection the inserted row belongs to
    #[must_use]
    pub fn collection(&self) -> &'static str {
        match self {
            Self::PledgeRecorded(_) => PLEDGES_COLLECTION,
            Self::CheerPosted(_) => CHEERS_COLLECTION,
        }
    }
}

/// Typed view of an insert-event record received from the push channel
#[derive(Debug, Clone, PartialEq)]
pub enum InsertRecord {
    Pledge(Pledge),
    Cheer(Cheer),
}

impl InsertRecord {
    /// Parse a raw record payload for the named collection
    ///
    /// Returns None for unknown collections or malformed records; the caller
    /// logs and drops those rather than failing the session.
    #[must_use]
    pub fn parse(collection: &str, record: &serde_json::Value) -> Option<Self> {
        match collection {
            PLEDGES_COLLECTION => serde_json::from_value(record.clone()).ok().map(Self::Pledge),
            CHEERS_COLLECTION => serde_json::from_value(record.clone()).ok().map(Self::Cheer),
            _ => None,
        }
    }
}

impl From<DomainEvent> for InsertRecord {
    fn from(event: DomainEvent) -> Self {
        match event {
            DomainEvent::PledgeRecorded(pledge) => Self::Pledge(pledge),
            DomainEvent::CheerPosted(cheer) => Self::Cheer(cheer),
        }
    }
}

impl From<InsertRecord> for DomainEvent {
    fn from(record: InsertRecord) -> Self {
        match record {
            InsertRecord::Pledge(pledge) => Self::PledgeRecorded(pledge),
            InsertRecord::Cheer(cheer) => Self::CheerPosted(cheer),
        }
    }
}
