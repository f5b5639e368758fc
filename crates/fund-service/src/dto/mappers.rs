//! Domain entity -> response DTO mappers

use chrono::{DateTime, Utc};

use fund_core::entities::Cheer;
use fund_core::projection::FundingSession;
use fund_core::value_objects::ThemeMode;

use super::responses::{CheerResponse, FundingResponse, ThemeResponse};

impl FundingResponse {
    /// Build the gauge response from a session projection
    #[must_use]
    pub fn from_session(session: &FundingSession) -> Self {
        Self {
            total: session.total(),
            goal: session.goal(),
            percent: session.percent(),
            gauge_ratio: session.gauge_ratio(),
            cursor: session.cursor().map(fund_core::value_objects::PledgeId::into_inner),
        }
    }
}

impl CheerResponse {
    /// Build a display row, rendering the relative timestamp against `now`
    #[must_use]
    pub fn from_cheer(cheer: &Cheer, now: DateTime<Utc>) -> Self {
        Self {
            id: cheer.id.into_inner(),
            author: cheer.author.clone(),
            message: cheer.message.clone(),
            initials: cheer.initials.clone(),
            color_from: cheer.color_from.clone(),
            color_to: cheer.color_to.clone(),
            time_ago: cheer.time_ago(now),
            created_at: cheer.created_at,
            is_local: cheer.is_local(),
        }
    }
}

impl From<ThemeMode> for ThemeResponse {
    fn from(mode: ThemeMode) -> Self {
        Self {
            theme: mode.as_str(),
        }
    }
}
