//! Checkout state machine
//!
//! `Selecting -> {Processing | AwaitingBankConfirmation} -> {Succeeded | Failed}`
//!
//! Leaving `Selecting` requires both a tier and a contact number (a client-side
//! precondition, not a store-enforced invariant). `Processing` ends in
//! `Succeeded` only when the persistence write confirmed; a failed write lands
//! in the explicit `Failed` terminal state instead of reporting success with
//! nothing recorded. The bank-transfer path parks in
//! `AwaitingBankConfirmation` until an explicit confirmation arrives. Closing
//! the checkout resets the machine to `Selecting`.

use chrono::{DateTime, Utc};

use crate::entities::RewardTier;
use crate::error::DomainError;
use crate::value_objects::{PaymentId, PaymentMethod, TierId};

/// Current phase of a checkout attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    #[default]
    Selecting,
    Processing,
    AwaitingBankConfirmation,
    Succeeded,
    Failed,
}

impl CheckoutPhase {
    /// Phase name for errors and logging
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Selecting => "Selecting",
            Self::Processing => "Processing",
            Self::AwaitingBankConfirmation => "AwaitingBankConfirmation",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }

    /// Whether this phase is terminal
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// A single checkout attempt
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    phase: CheckoutPhase,
    tier: Option<TierId>,
    contact: Option<String>,
    method: Option<PaymentMethod>,
    payment_id: Option<PaymentId>,
    failure: Option<String>,
}

impl Checkout {
    /// Start a fresh checkout in `Selecting`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    pub fn payment_id(&self) -> Option<&PaymentId> {
        self.payment_id.as_ref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Select a reward tier (only meaningful in `Selecting`)
    pub fn select_tier(&mut self, tier: TierId) -> Result<(), DomainError> {
        self.require_phase(CheckoutPhase::Selecting)?;
        if RewardTier::find(tier).is_none() {
            return Err(DomainError::TierNotFound(tier));
        }
        self.tier = Some(tier);
        Ok(())
    }

    /// Set the contact number (only meaningful in `Selecting`)
    pub fn set_contact(&mut self, contact: impl Into<String>) -> Result<(), DomainError> {
        self.require_phase(CheckoutPhase::Selecting)?;
        let contact = contact.into();
        validate_contact(&contact)?;
        self.contact = Some(contact);
        Ok(())
    }

    /// Choose the payment method (only meaningful in `Selecting`)
    pub fn set_method(&mut self, method: PaymentMethod) -> Result<(), DomainError> {
        self.require_phase(CheckoutPhase::Selecting)?;
        self.method = Some(method);
        Ok(())
    }

    /// Submit the checkout, leaving `Selecting`
    ///
    /// Precondition: tier and contact are both set. Card-style methods move to
    /// `Processing`; bank transfer moves to `AwaitingBankConfirmation`.
    /// Returns the generated payment token.
    pub fn submit(&mut self, at: DateTime<Utc>) -> Result<PaymentId, DomainError> {
        self.require_phase(CheckoutPhase::Selecting)?;
        if self.tier.is_none() {
            return Err(DomainError::MissingTier);
        }
        if self.contact.is_none() {
            return Err(DomainError::MissingContact);
        }

        let method = self.method.unwrap_or(PaymentMethod::Card);
        let payment_id = PaymentId::generate(method, at);
        self.payment_id = Some(payment_id.clone());
        self.phase = if method.is_deferred() {
            CheckoutPhase::AwaitingBankConfirmation
        } else {
            CheckoutPhase::Processing
        };
        Ok(payment_id)
    }

    /// Complete a `Processing` attempt with a confirmed write
    pub fn succeed(&mut self) -> Result<(), DomainError> {
        self.require_phase(CheckoutPhase::Processing)?;
        self.phase = CheckoutPhase::Succeeded;
        Ok(())
    }

    /// Complete a `Processing` attempt whose write failed
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), DomainError> {
        self.require_phase(CheckoutPhase::Processing)?;
        self.phase = CheckoutPhase::Failed;
        self.failure = Some(reason.into());
        Ok(())
    }

    /// Confirm a bank transfer, completing the attempt
    pub fn confirm_bank_transfer(&mut self) -> Result<(), DomainError> {
        self.require_phase(CheckoutPhase::AwaitingBankConfirmation)?;
        self.phase = CheckoutPhase::Succeeded;
        Ok(())
    }

    /// Reset to `Selecting`, clearing the attempt (modal close)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Selected tier and contact, available once both are set
    pub fn selection(&self) -> Option<(&'static RewardTier, &str)> {
        let tier = self.tier.and_then(RewardTier::find)?;
        let contact = self.contact.as_deref()?;
        Some((tier, contact))
    }

    fn require_phase(&self, expected: CheckoutPhase) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else if self.phase.is_terminal() {
            Err(DomainError::CheckoutCompleted)
        } else {
            Err(DomainError::InvalidTransition {
                from: self.phase.name(),
            })
        }
    }
}

/// Validate a contact number: digits (with optional separators), at least 10 digits
pub fn validate_contact(contact: &str) -> Result<(), DomainError> {
    let digits = contact.chars().filter(char::is_ascii_digit).count();
    if contact.trim().is_empty() {
        return Err(DomainError::MissingContact);
    }
    if digits < 10 || !contact.chars().all(|c| c.is_ascii_digit() || c == '-' || c == ' ') {
        return Err(DomainError::InvalidContact(contact.to_string()));
    }
    Ok(())
}
