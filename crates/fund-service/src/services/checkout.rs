//! Checkout service
//!
//! Drives the checkout state machine for a single submission. Card-style
//! methods pass through a simulated gateway delay and persist immediately;
//! bank transfers park in a pending table until explicitly confirmed. A
//! persistence failure surfaces as an explicit `failed` outcome, never as a
//! silent success.

use std::time::Duration;

use chrono::Utc;
use tracing::{info, instrument, warn};
use validator::Validate;

use fund_core::checkout::{Checkout, CheckoutPhase};
use fund_core::entities::{Pledge, RewardTier};
use fund_core::error::DomainError;
use fund_core::value_objects::{PaymentId, PledgeId, TierId};

use crate::dto::{CreatePledgeRequest, PledgeResponse, PledgeStatus};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A submitted bank transfer waiting for confirmation
#[derive(Debug, Clone)]
pub struct PendingTransfer {
    pub tier: &'static RewardTier,
    pub mobile: String,
    pub payment_id: PaymentId,
}

/// Checkout service
pub struct CheckoutService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheckoutService<'a> {
    /// Create a new CheckoutService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a checkout
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: CreatePledgeRequest) -> ServiceResult<PledgeResponse> {
        request.validate()?;

        let mut checkout = Checkout::new();
        checkout.select_tier(TierId::new(request.tier_id))?;
        checkout.set_contact(request.mobile)?;
        if let Some(method) = request.method {
            checkout.set_method(method)?;
        }

        let payment_id = checkout.submit(Utc::now())?;
        let (tier, contact) = checkout
            .selection()
            .ok_or_else(|| ServiceError::internal("Selection missing after submit"))?;
        let mobile = contact.to_string();

        match checkout.phase() {
            CheckoutPhase::AwaitingBankConfirmation => {
                self.ctx.pending_transfers().write().await.insert(
                    payment_id.as_str().to_string(),
                    PendingTransfer {
                        tier,
                        mobile,
                        payment_id: payment_id.clone(),
                    },
                );

                info!(payment_id = %payment_id, "Bank transfer awaiting confirmation");

                Ok(PledgeResponse {
                    payment_id: payment_id.to_string(),
                    status: PledgeStatus::AwaitingBankConfirmation,
                    tier_name: tier.name.to_string(),
                    amount: tier.price,
                    failure: None,
                })
            }
            CheckoutPhase::Processing => {
                // Simulated gateway confirmation delay
                tokio::time::sleep(Duration::from_millis(self.ctx.campaign().gateway_delay_ms))
                    .await;

                self.record(&mut checkout, tier, mobile, payment_id).await
            }
            phase => Err(ServiceError::internal(format!(
                "Unexpected checkout phase after submit: {}",
                phase.name()
            ))),
        }
    }

    /// Confirm a parked bank transfer, persisting the pledge
    #[instrument(skip(self))]
    pub async fn confirm(&self, payment_id: &str) -> ServiceResult<PledgeResponse> {
        let pending = self
            .ctx
            .pending_transfers()
            .write()
            .await
            .remove(payment_id)
            .ok_or_else(|| DomainError::PledgeNotFound(payment_id.to_string()))?;

        let pledge = Pledge::new(
            PledgeId::default(),
            pending.tier.price,
            pending.tier.name.to_string(),
            pending.mobile,
            pending.payment_id.clone(),
        );

        match self.ctx.pledge_repo().insert(&pledge).await {
            Ok(stored) => {
                info!(payment_id = %pending.payment_id, pledge_id = %stored.id, "Bank transfer confirmed");
                self.ctx.publisher().pledge_recorded(&stored).await;

                Ok(PledgeResponse {
                    payment_id: pending.payment_id.to_string(),
                    status: PledgeStatus::Succeeded,
                    tier_name: stored.tier_name,
                    amount: stored.amount,
                    failure: None,
                })
            }
            Err(e) => {
                warn!(payment_id = %pending.payment_id, error = %e, "Bank transfer write failed");

                Ok(PledgeResponse {
                    payment_id: pending.payment_id.to_string(),
                    status: PledgeStatus::Failed,
                    tier_name: pending.tier.name.to_string(),
                    amount: pending.tier.price,
                    failure: Some(e.to_string()),
                })
            }
        }
    }

    /// Persist a processing checkout, completing the state machine
    async fn record(
        &self,
        checkout: &mut Checkout,
        tier: &'static RewardTier,
        mobile: String,
        payment_id: PaymentId,
    ) -> ServiceResult<PledgeResponse> {
        let pledge = Pledge::new(
            PledgeId::default(),
            tier.price,
            tier.name.to_string(),
            mobile,
            payment_id.clone(),
        );

        match self.ctx.pledge_repo().insert(&pledge).await {
            Ok(stored) => {
                checkout.succeed()?;
                info!(payment_id = %payment_id, pledge_id = %stored.id, "Pledge recorded");
                self.ctx.publisher().pledge_recorded(&stored).await;

                Ok(PledgeResponse {
                    payment_id: payment_id.to_string(),
                    status: PledgeStatus::Succeeded,
                    tier_name: stored.tier_name,
                    amount: stored.amount,
                    failure: None,
                })
            }
            Err(e) => {
                checkout.fail(e.to_string())?;
                warn!(payment_id = %payment_id, error = %e, "Pledge write failed");

                Ok(PledgeResponse {
                    payment_id: payment_id.to_string(),
                    status: PledgeStatus::Failed,
                    tier_name: tier.name.to_string(),
                    amount: tier.price,
                    failure: Some(e.to_string()),
                })
            }
        }
    }
}
