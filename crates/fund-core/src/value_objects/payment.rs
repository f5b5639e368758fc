//! Payment method and payment token
//!
//! The payment token is not a gateway transaction id: the gateway is simulated.
//! It is a client-generated idempotency-ish token embedding the method prefix
//! and the submission timestamp in milliseconds, e.g. `card-1724900000000`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    KakaoPay,
    TossPay,
    /// Manual transfer path; completes only after explicit confirmation
    BankTransfer,
}

impl PaymentMethod {
    /// Token prefix used when generating a payment id
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::KakaoPay => "kakao",
            Self::TossPay => "toss",
            Self::BankTransfer => "bank",
        }
    }

    /// Whether this method requires out-of-band confirmation before the
    /// pledge is recorded
    #[must_use]
    pub const fn is_deferred(self) -> bool {
        matches!(self, Self::BankTransfer)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Client-generated payment token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Generate a token for the given method at the given instant
    #[must_use]
    pub fn generate(method: PaymentMethod, at: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", method.prefix(), at.timestamp_millis()))
    }

    /// Wrap an existing token value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the token as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the method prefix portion of the token, if present
    #[must_use]
    pub fn method_prefix(&self) -> Option<&str> {
        self.0.split_once('-').map(|(prefix, _)| prefix)
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_payment_id_embeds_prefix_and_timestamp() {
        let at = Utc.timestamp_millis_opt(1_724_900_000_000).unwrap();
        let id = PaymentId::generate(PaymentMethod::Card, at);
        assert_eq!(id.as_str(), "card-1724900000000");
        assert_eq!(id.method_prefix(), Some("card"));
    }

    #[test]
    fn test_bank_transfer_is_deferred() {
        assert!(PaymentMethod::BankTransfer.is_deferred());
        assert!(!PaymentMethod::Card.is_deferred());
        assert!(!PaymentMethod::KakaoPay.is_deferred());
    }
}
