//! UI theme mode
//!
//! The mode is process-wide derived state: read once from the preference store
//! at startup (falling back to the system default when the key is absent) and
//! written back on toggle. Persistence goes through the `PreferenceStore` port
//! rather than ambient global access.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI color-scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a stored preference value; unknown values yield None
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The persisted string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve the effective mode from a stored value and a system default
    #[must_use]
    pub fn resolve(stored: Option<&str>, system_default: Self) -> Self {
        stored.and_then(Self::parse).unwrap_or(system_default)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
