//! Redis-backed implementation of the PreferenceStore port.
//!
//! Stores small key/value UI preferences. Currently the only key in use is
//! the theme; the port stays generic so further preferences can reuse it.

use async_trait::async_trait;
use tracing::instrument;

use fund_core::error::DomainError;
use fund_core::traits::{PreferenceStore, RepoResult};

use crate::pool::RedisPool;

/// Namespace prefix for preference keys
pub const PREF_KEY_PREFIX: &str = "prefs:";
/// Preference key holding the stored theme mode
pub const THEME_KEY: &str = "theme";

/// Redis implementation of PreferenceStore
#[derive(Clone)]
pub struct RedisPreferenceStore {
    pool: RedisPool,
}

impl RedisPreferenceStore {
    /// Create a new RedisPreferenceStore
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    fn full_key(key: &str) -> String {
        format!("{PREF_KEY_PREFIX}{key}")
    }
}

#[async_trait]
impl PreferenceStore for RedisPreferenceStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        self.pool
            .get_value(&Self::full_key(key))
            .await
            .map_err(|e| DomainError::PreferenceError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.pool
            .set(&Self::full_key(key), value)
            .await
            .map_err(|e| DomainError::PreferenceError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_namespacing() {
        assert_eq!(RedisPreferenceStore::full_key(THEME_KEY), "prefs:theme");
    }
}
