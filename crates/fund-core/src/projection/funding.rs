//! Running-total projection
//!
//! Invariant: at any observation point the running total equals the sum of
//! amounts over exactly the set of pledges this session has observed, each
//! counted once. The baseline read returns a cursor (the highest pledge id in
//! the snapshot); a delivered insert is folded in only when its id lies past
//! the cursor, which closes the race between the bulk read and the
//! subscription start and drops transport redeliveries of already-counted rows.

use serde::{Deserialize, Serialize};

use crate::entities::Pledge;
use crate::value_objects::PledgeId;

/// Result of the baseline bulk read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FundingSnapshot {
    /// Sum of all pledge amounts at the snapshot point
    pub total: i64,
    /// Highest pledge id included in the total; None for an empty collection
    pub cursor: Option<PledgeId>,
}

impl FundingSnapshot {
    /// Snapshot for an empty or unreadable collection
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total: 0,
            cursor: None,
        }
    }
}

/// Per-session running total with bounded gauge output
#[derive(Debug, Clone)]
pub struct FundingSession {
    total: i64,
    cursor: Option<PledgeId>,
    goal: i64,
}

impl FundingSession {
    /// Seed a session from a baseline snapshot
    ///
    /// A malformed negative baseline clamps to zero so the gauge can never
    /// render a negative total.
    #[must_use]
    pub fn new(snapshot: FundingSnapshot, goal: i64) -> Self {
        Self {
            total: snapshot.total.max(0),
            cursor: snapshot.cursor,
            goal,
        }
    }

    /// Fold one delivered pledge insert into the total
    ///
    /// Returns true when the delta was applied, false when the event lies at
    /// or before the cursor and was dropped as already counted.
    pub fn apply(&mut self, pledge: &Pledge) -> bool {
        if let Some(cursor) = self.cursor {
            if pledge.id <= cursor {
                return false;
            }
        }
        self.total = self.total.saturating_add(pledge.counted_amount());
        self.cursor = Some(pledge.id);
        true
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn cursor(&self) -> Option<PledgeId> {
        self.cursor
    }

    /// Progress percentage, rounded to the nearest whole percent
    ///
    /// Unbounded above 100 (the page celebrates overfunding); a non-positive
    /// goal reads as 0 rather than dividing by zero.
    #[must_use]
    pub fn percent(&self) -> i64 {
        if self.goal <= 0 {
            return 0;
        }
        self.total
            .saturating_mul(100)
            .saturating_add(self.goal / 2)
            / self.goal
    }

    /// Gauge fill ratio, clamped to 0..=100 so the ring never overdraws
    #[must_use]
    pub fn gauge_ratio(&self) -> u8 {
        self.percent().clamp(0, 100) as u8
    }
}
