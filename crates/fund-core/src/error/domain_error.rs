//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::TierId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reward tier not found: {0}")]
    TierNotFound(TierId),

    #[error("Pledge not found: {0}")]
    PledgeNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("A reward tier must be selected")]
    MissingTier,

    #[error("A contact number is required")]
    MissingContact,

    #[error("Invalid contact number: {0}")]
    InvalidContact(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // State Machine Violations
    // =========================================================================
    #[error("Invalid checkout transition from {from}")]
    InvalidTransition { from: &'static str },

    #[error("Checkout already completed")]
    CheckoutCompleted,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Push channel error: {0}")]
    ChannelError(String),

    #[error("Preference store error: {0}")]
    PreferenceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::TierNotFound(_) => "UNKNOWN_TIER",
            Self::PledgeNotFound(_) => "UNKNOWN_PLEDGE",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingTier => "MISSING_TIER",
            Self::MissingContact => "MISSING_CONTACT",
            Self::InvalidContact(_) => "INVALID_CONTACT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::CheckoutCompleted => "CHECKOUT_COMPLETED",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::ChannelError(_) => "CHANNEL_ERROR",
            Self::PreferenceError(_) => "PREFERENCE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TierNotFound(_) | Self::PledgeNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingTier
                | Self::MissingContact
                | Self::InvalidContact(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a checkout state violation
    pub fn is_state_violation(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. } | Self::CheckoutCompleted)
    }
}
