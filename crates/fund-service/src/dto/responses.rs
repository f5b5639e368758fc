//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Funding gauge state
#[derive(Debug, Clone, Serialize)]
pub struct FundingResponse {
    /// Running total in minor currency units
    pub total: i64,
    /// Campaign goal in minor currency units
    pub goal: i64,
    /// Rounded percentage of the goal; may exceed 100
    pub percent: i64,
    /// Percentage clamped to 0..=100 for rendering
    pub gauge_ratio: u8,
    /// Highest pledge id included in the total; live sessions seed from this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
}

/// A cheer as displayed on the campaign wall
#[derive(Debug, Clone, Serialize)]
pub struct CheerResponse {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub initials: String,
    pub color_from: String,
    pub color_to: String,
    /// Relative display timestamp ("Just now", "5m ago", ...)
    pub time_ago: String,
    pub created_at: DateTime<Utc>,
    /// True for cheers that only exist in this process (store write failed)
    pub is_local: bool,
}

/// Outcome of a checkout attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PledgeStatus {
    Succeeded,
    Failed,
    AwaitingBankConfirmation,
}

/// Checkout result
#[derive(Debug, Clone, Serialize)]
pub struct PledgeResponse {
    pub payment_id: String,
    pub status: PledgeStatus,
    pub tier_name: String,
    pub amount: i64,
    /// Reason the attempt failed; present only for `failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Stored theme preference
#[derive(Debug, Clone, Serialize)]
pub struct ThemeResponse {
    pub theme: &'static str,
}

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
