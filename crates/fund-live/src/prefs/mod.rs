//! Persisted UI preferences

mod preference_store;

pub use preference_store::{RedisPreferenceStore, PREF_KEY_PREFIX, THEME_KEY};
