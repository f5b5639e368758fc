//! Funding service
//!
//! Serves the pledge-total baseline for the gauge. A failed bulk read is
//! degraded to a zero snapshot so the page still renders; live deltas then
//! rebuild the total from whatever arrives.

use tracing::{instrument, warn};

use fund_core::projection::{FundingSession, FundingSnapshot};

use crate::dto::FundingResponse;

use super::context::ServiceContext;

/// Funding service
pub struct FundingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FundingService<'a> {
    /// Create a new FundingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Read the baseline snapshot, degrading to zero on failure
    #[instrument(skip(self))]
    pub async fn baseline(&self) -> FundingSnapshot {
        match self.ctx.pledge_repo().sum_amounts().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Baseline read failed; starting from zero");
                FundingSnapshot::empty()
            }
        }
    }

    /// Seed a live session projection from the current baseline
    pub async fn session(&self) -> FundingSession {
        FundingSession::new(self.baseline().await, self.ctx.campaign().goal_amount)
    }

    /// Gauge state for the landing page
    #[instrument(skip(self))]
    pub async fn funding(&self) -> FundingResponse {
        FundingResponse::from_session(&self.session().await)
    }
}
