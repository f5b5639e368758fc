//! Identifier newtypes for store-owned records
//!
//! Pledge and cheer identifiers are server-assigned (BIGSERIAL) and opaque to
//! the client. Locally constructed fallback cheers use negative identifiers so
//! they can never collide with store rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned pledge identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PledgeId(i64);

impl PledgeId {
    /// Create a PledgeId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PledgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PledgeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Server-assigned cheer identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CheerId(i64);

impl CheerId {
    /// Create a CheerId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Create a local-only identifier for a fallback cheer (always negative)
    #[inline]
    pub const fn local(n: i64) -> Self {
        Self(-n.abs())
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check whether this identifier was generated locally
    #[inline]
    pub const fn is_local(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for CheerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CheerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Reward tier identifier (fixed catalogue, 1-based)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TierId(i16);

impl TierId {
    /// Create a TierId from a raw i16 value
    #[inline]
    pub const fn new(id: i16) -> Self {
        Self(id)
    }

    /// Get the inner i16 value
    #[inline]
    pub const fn into_inner(self) -> i16 {
        self.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
