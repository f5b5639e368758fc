//! Cheer entity - a supporter message on the campaign wall
//!
//! Cheers are insert-only and displayed newest-first. A cheer posted from this
//! process carries a client-generated correlation id (`client_ref`) so the
//! subscription echo of its own insert can be recognized and suppressed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{initials_of, time_ago, AvatarGradient, CheerId};

/// Cheer entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheer {
    pub id: CheerId,
    pub author: String,
    pub message: String,
    /// First two characters of the author, uppercased
    pub initials: String,
    pub color_from: String,
    pub color_to: String,
    /// Correlation id stamped on locally originated submissions
    pub client_ref: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Cheer {
    /// Create a new Cheer for submission, deriving initials and stamping a
    /// fresh correlation id
    pub fn compose(author: String, message: String, gradient: AvatarGradient) -> Self {
        let initials = initials_of(&author);
        Self {
            id: CheerId::default(),
            author,
            message,
            initials,
            color_from: gradient.from.to_string(),
            color_to: gradient.to.to_string(),
            client_ref: Some(Uuid::new_v4()),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a composed cheer as a local fallback record
    ///
    /// Used when the store write fails: the cheer gets a locally generated
    /// negative identifier and loses its correlation id, since there will
    /// never be a server echo to reconcile against.
    #[must_use]
    pub fn into_local_fallback(mut self, local_seq: i64) -> Self {
        self.id = CheerId::local(local_seq);
        self.client_ref = None;
        self
    }

    /// Check whether this cheer only exists locally
    #[inline]
    pub fn is_local(&self) -> bool {
        self.id.is_local()
    }

    /// Relative display timestamp
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        time_ago(self.created_at, now)
    }
}
