//! Pledge entity - a funding commitment record
//!
//! Pledges are insert-only: created by checkout submission, never mutated or
//! deleted in normal operation. The identifier is assigned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{PaymentId, PledgeId};

/// Pledge entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pledge {
    pub id: PledgeId,
    /// Amount in minor currency units; non-negative once persisted
    pub amount: i64,
    pub tier_name: String,
    pub mobile: String,
    pub payment_id: PaymentId,
    pub created_at: DateTime<Utc>,
}

impl Pledge {
    /// Create a new Pledge
    pub fn new(
        id: PledgeId,
        amount: i64,
        tier_name: String,
        mobile: String,
        payment_id: PaymentId,
    ) -> Self {
        Self {
            id,
            amount,
            tier_name,
            mobile,
            payment_id,
            created_at: Utc::now(),
        }
    }

    /// Amount contribution to the running total
    ///
    /// Null amounts never reach the entity, but a malformed negative row still
    /// contributes zero rather than pulling the total backwards.
    #[inline]
    pub fn counted_amount(&self) -> i64 {
        self.amount.max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::PaymentMethod;

    fn pledge(amount: i64) -> Pledge {
        Pledge::new(
            PledgeId::new(1),
            amount,
            "Early Bird Ticket".to_string(),
            "01012345678".to_string(),
            PaymentId::generate(PaymentMethod::Card, Utc::now()),
        )
    }

    #[test]
    fn test_counted_amount_clamps_negative() {
        assert_eq!(pledge(50_000).counted_amount(), 50_000);
        assert_eq!(pledge(0).counted_amount(), 0);
        assert_eq!(pledge(-500).counted_amount(), 0);
    }
}
