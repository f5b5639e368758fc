//! Pub/Sub channel definitions.
//!
//! One channel per insert-only collection. The channel name doubles as the
//! routing key a live session subscribes with.

use fund_core::events::{CHEERS_COLLECTION, PLEDGES_COLLECTION};

/// Channel carrying pledge insert events
pub const PLEDGES_CHANNEL: &str = "pledges:inserts";
/// Channel carrying cheer insert events
pub const CHEERS_CHANNEL: &str = "cheers:inserts";

/// Pub/Sub channel types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiveChannel {
    /// Pledge inserts
    Pledges,
    /// Cheer inserts
    Cheers,
}

impl LiveChannel {
    /// All channels a full live session listens on
    pub const ALL: [Self; 2] = [Self::Pledges, Self::Cheers];

    /// Get the Redis channel name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pledges => PLEDGES_CHANNEL,
            Self::Cheers => CHEERS_CHANNEL,
        }
    }

    /// Collection whose rows travel on this channel
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Pledges => PLEDGES_COLLECTION,
            Self::Cheers => CHEERS_COLLECTION,
        }
    }

    /// Parse a channel name back to a `LiveChannel`
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            PLEDGES_CHANNEL => Some(Self::Pledges),
            CHEERS_CHANNEL => Some(Self::Cheers),
            _ => None,
        }
    }
}

impl std::fmt::Display for LiveChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
