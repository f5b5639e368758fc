//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies that carry user input
//! also implement `Validate`.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use fund_core::value_objects::PaymentMethod;

// ============================================================================
// Pledge Requests
// ============================================================================

/// Checkout submission request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePledgeRequest {
    /// Reward tier id from the fixed catalogue
    pub tier_id: i16,

    #[validate(length(min = 10, max = 20, message = "Mobile number must be 10-20 characters"))]
    pub mobile: String,

    /// Payment method; defaults to card when omitted
    pub method: Option<PaymentMethod>,
}

// ============================================================================
// Cheer Requests
// ============================================================================

/// Post a cheer to the campaign wall
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCheerRequest {
    #[validate(length(min = 1, max = 10, message = "Name must be 1-10 characters"))]
    pub author: String,

    #[validate(length(min = 1, max = 100, message = "Message must be 1-100 characters"))]
    pub message: String,

    /// Correlation id from a connected live client; echoed back on the
    /// stored row so the submitter's session can reconcile its optimistic
    /// prepend. Absent for plain submissions.
    #[serde(default)]
    pub client_ref: Option<Uuid>,
}

// ============================================================================
// Theme Requests
// ============================================================================

/// Update the stored theme preference
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateThemeRequest {
    /// "light" or "dark"
    pub theme: String,
}
