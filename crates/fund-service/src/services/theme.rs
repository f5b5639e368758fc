//! Theme service
//!
//! Reads and writes the persisted theme preference through the
//! `PreferenceStore` port. A missing or unreadable stored value resolves to
//! the configured default.

use tracing::{instrument, warn};

use fund_core::value_objects::ThemeMode;

use crate::dto::{ThemeResponse, UpdateThemeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Preference key holding the stored theme mode
pub const THEME_PREF_KEY: &str = "theme";

/// Theme service
pub struct ThemeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThemeService<'a> {
    /// Create a new ThemeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the current theme: stored value, else configured default
    #[instrument(skip(self))]
    pub async fn current(&self) -> ThemeResponse {
        let stored = match self.ctx.preference_store().get(THEME_PREF_KEY).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Theme read failed; using default");
                None
            }
        };

        let mode = ThemeMode::resolve(stored.as_deref(), self.ctx.campaign().default_theme);
        ThemeResponse::from(mode)
    }

    /// Store a theme preference
    #[instrument(skip(self, request))]
    pub async fn update(&self, request: UpdateThemeRequest) -> ServiceResult<ThemeResponse> {
        let mode = ThemeMode::parse(&request.theme)
            .ok_or_else(|| ServiceError::validation(format!("Unknown theme: {}", request.theme)))?;

        self.ctx
            .preference_store()
            .set(THEME_PREF_KEY, mode.as_str())
            .await?;

        Ok(ThemeResponse::from(mode))
    }
}
