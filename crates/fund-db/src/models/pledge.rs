//! Pledge database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the pledges table
///
/// The amount column is nullable: legacy rows imported from the original
/// store may carry NULL, which counts as zero everywhere.
#[derive(Debug, Clone, FromRow)]
pub struct PledgeModel {
    pub id: i64,
    pub amount: Option<i64>,
    pub tier_name: String,
    pub mobile: String,
    pub payment_id: String,
    pub created_at: DateTime<Utc>,
}

impl PledgeModel {
    /// Amount with NULL collapsed to zero
    #[inline]
    pub fn amount_or_zero(&self) -> i64 {
        self.amount.unwrap_or(0)
    }
}

/// Aggregate row for the funding baseline query
///
/// `cursor` is the highest pledge id included in `total`, or NULL when the
/// table is empty.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct FundingTotalsRow {
    pub total: i64,
    pub cursor: Option<i64>,
}
