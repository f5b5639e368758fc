//! Cheer feed projection
//!
//! A newest-first list seeded from the store (or from a deterministic fixture
//! set when the store is unreachable) and folded forward by insert events.
//! Locally originated submissions are prepended optimistically and their
//! correlation ids remembered, so the subscription echo of the same row is
//! suppressed instead of prepended twice.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use uuid::Uuid;

use crate::entities::Cheer;
use crate::value_objects::{CheerId, AVATAR_PALETTE};

/// The fixed demo feed shown when the store is unreachable or its schema is
/// absent. Ages are strictly increasing, most recent first.
#[must_use]
pub fn fallback_cheers(now: DateTime<Utc>) -> Vec<Cheer> {
    const FIXTURES: [(&str, &str, &str, usize); 2] = [
        (
            "Ji-Soo Park",
            "The teaser looks amazing! Mark's camera work is on point!",
            "JS",
            2,
        ),
        (
            "Min-Kyung Lee",
            "Can't wait to hear 'One Song Glory' live!",
            "MK",
            5,
        ),
    ];

    FIXTURES
        .iter()
        .enumerate()
        .map(|(index, (author, message, initials, palette_slot))| {
            let gradient = AVATAR_PALETTE[*palette_slot % AVATAR_PALETTE.len()];
            Cheer {
                id: CheerId::local(index as i64 + 1),
                author: (*author).to_string(),
                message: (*message).to_string(),
                initials: (*initials).to_string(),
                color_from: gradient.from.to_string(),
                color_to: gradient.to.to_string(),
                client_ref: None,
                // Two hours apart per slot, most recent first
                created_at: now - Duration::hours(2 * (index as i64 + 1)),
            }
        })
        .collect()
}

/// Per-session cheer feed
#[derive(Debug, Clone)]
pub struct CheerFeed {
    cheers: Vec<Cheer>,
    pending: HashSet<Uuid>,
    from_fallback: bool,
    local_seq: i64,
}

impl CheerFeed {
    /// Seed from a successful store read (already newest-first)
    #[must_use]
    pub fn from_store(cheers: Vec<Cheer>) -> Self {
        Self {
            cheers,
            pending: HashSet::new(),
            from_fallback: false,
            local_seq: 0,
        }
    }

    /// Seed from the fixture set after a failed store read
    #[must_use]
    pub fn fallback(now: DateTime<Utc>) -> Self {
        let cheers = fallback_cheers(now);
        let local_seq = cheers.len() as i64;
        Self {
            cheers,
            pending: HashSet::new(),
            from_fallback: true,
            local_seq,
        }
    }

    /// Fold a subscription-delivered cheer into the feed
    ///
    /// Returns false when the cheer is the echo of a pending local submission
    /// (matched by correlation id) and was suppressed. The fixture list is
    /// never merged or deduplicated against store rows.
    pub fn apply(&mut self, cheer: Cheer) -> bool {
        if let Some(client_ref) = cheer.client_ref {
            if self.pending.remove(&client_ref) {
                return false;
            }
        }
        self.cheers.insert(0, cheer);
        true
    }

    /// Prepend an optimistic local submission and remember its correlation id
    pub fn push_local(&mut self, cheer: Cheer) {
        if let Some(client_ref) = cheer.client_ref {
            self.pending.insert(client_ref);
        }
        self.cheers.insert(0, cheer);
    }

    /// Prepend a local fallback cheer after a failed store write
    ///
    /// Never reconciled: there is no server echo to wait for.
    pub fn push_fallback(&mut self, cheer: Cheer) -> &Cheer {
        self.local_seq += 1;
        let cheer = cheer.into_local_fallback(self.local_seq);
        self.cheers.insert(0, cheer);
        &self.cheers[0]
    }

    /// The feed, newest first
    pub fn cheers(&self) -> &[Cheer] {
        &self.cheers
    }

    /// Whether the seed came from the fixture set
    pub fn is_fallback(&self) -> bool {
        self.from_fallback
    }

    pub fn len(&self) -> usize {
        self.cheers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cheers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::AvatarGradient;

    fn store_cheer(id: i64, author: &str) -> Cheer {
        let mut cheer = Cheer::compose(
            author.to_string(),
            "fighting!".to_string(),
            AVATAR_PALETTE[0],
        );
        cheer.id = CheerId::new(id);
        cheer.client_ref = None;
        cheer
    }

    #[test]
    fn test_fallback_ages_strictly_increase() {
        let now = Utc::now();
        let cheers = fallback_cheers(now);
        assert_eq!(cheers.len(), 2);
        assert!(cheers[0].created_at > cheers[1].created_at);
        assert!(cheers.iter().all(Cheer::is_local));
    }

    #[test]
    fn test_subscription_insert_prepends() {
        let mut feed = CheerFeed::from_store(vec![store_cheer(1, "first")]);
        assert!(feed.apply(store_cheer(2, "second")));
        assert_eq!(feed.cheers()[0].author, "second");
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_optimistic_echo_is_suppressed() {
        let mut feed = CheerFeed::from_store(Vec::new());

        let local = Cheer::compose(
            "Su-Jin".to_string(),
            "break a leg!".to_string(),
            AvatarGradient::random(),
        );
        let client_ref = local.client_ref;
        feed.push_local(local.clone());
        assert_eq!(feed.len(), 1);

        // Server echo of the same submission: same correlation id, real id
        let mut echo = local;
        echo.id = CheerId::new(42);
        assert!(!feed.apply(echo));
        assert_eq!(feed.len(), 1, "echo must not double-prepend");

        // A later unrelated event with a different ref still prepends
        let mut other = Cheer::compose(
            "Tae-Young".to_string(),
            "see you there".to_string(),
            AvatarGradient::random(),
        );
        other.id = CheerId::new(43);
        assert_ne!(other.client_ref, client_ref);
        assert!(feed.apply(other));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_echo_suppression_is_one_shot() {
        let mut feed = CheerFeed::from_store(Vec::new());
        let local = Cheer::compose(
            "Ha-Eun".to_string(),
            "woo!".to_string(),
            AvatarGradient::random(),
        );
        feed.push_local(local.clone());

        let mut echo = local.clone();
        echo.id = CheerId::new(7);
        assert!(!feed.apply(echo.clone()));
        // A second delivery of the same ref is no longer pending; it prepends
        // (exactly-once is assumed from the transport, per the documented
        // limitation on redelivery).
        assert!(feed.apply(echo));
    }

    #[test]
    fn test_fallback_write_path_prepends_local_record() {
        let now = Utc::now();
        let mut feed = CheerFeed::fallback(now);
        assert!(feed.is_fallback());

        let composed = Cheer::compose(
            "Min-Su".to_string(),
            "good luck".to_string(),
            AvatarGradient::random(),
        );
        let stored = feed.push_fallback(composed).clone();
        assert!(stored.is_local());
        assert!(stored.client_ref.is_none());
        assert_eq!(feed.cheers()[0], stored);
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn test_feed_stays_newest_first() {
        let mut feed = CheerFeed::from_store(vec![store_cheer(5, "e"), store_cheer(4, "d")]);
        feed.apply(store_cheer(6, "f"));
        feed.push_local(Cheer::compose(
            "g".to_string(),
            "latest".to_string(),
            AvatarGradient::random(),
        ));
        let authors: Vec<_> = feed.cheers().iter().map(|c| c.author.as_str()).collect();
        assert_eq!(authors, vec!["g", "f", "e", "d"]);
    }
}
