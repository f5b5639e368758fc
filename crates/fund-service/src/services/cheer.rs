//! Cheer service
//!
//! Reads the wall feed and posts new cheers. Both operations degrade rather
//! than fail: an unreadable feed is replaced by the fixture list, and a
//! cheer whose store write fails is returned as a local-only record so the
//! user-visible action still completes.

use chrono::Utc;
use tracing::{info, instrument, warn};
use validator::Validate;

use fund_core::entities::Cheer;
use fund_core::projection::{fallback_cheers, CheerFeed};
use fund_core::value_objects::AvatarGradient;

use crate::dto::{CheerResponse, CreateCheerRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Cheer service
pub struct CheerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheerService<'a> {
    /// Create a new CheerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the latest cheers, falling back to the fixture list on failure
    #[instrument(skip(self))]
    pub async fn feed(&self) -> Vec<CheerResponse> {
        let now = Utc::now();
        let cheers = match self
            .ctx
            .cheer_repo()
            .latest(self.ctx.campaign().feed_limit)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "Cheer feed read failed; serving fixture feed");
                fallback_cheers(now)
            }
        };

        cheers
            .iter()
            .map(|cheer| CheerResponse::from_cheer(cheer, now))
            .collect()
    }

    /// Seed a live feed projection, falling back to the fixture list
    pub async fn session(&self) -> CheerFeed {
        match self
            .ctx
            .cheer_repo()
            .latest(self.ctx.campaign().feed_limit)
            .await
        {
            Ok(rows) => CheerFeed::from_store(rows),
            Err(e) => {
                warn!(error = %e, "Cheer feed read failed; seeding fixture feed");
                CheerFeed::fallback(Utc::now())
            }
        }
    }

    /// Post a cheer
    ///
    /// On a confirmed insert the stored row is returned and a `cheer_posted`
    /// event is published. On a failed insert the composed cheer is returned
    /// as a local fallback record instead of an error.
    #[instrument(skip(self, request))]
    pub async fn post(&self, request: CreateCheerRequest) -> ServiceResult<CheerResponse> {
        request.validate()?;

        let mut cheer = Cheer::compose(request.author, request.message, AvatarGradient::random());
        if let Some(client_ref) = request.client_ref {
            // A connected live client reconciles its optimistic prepend
            // against this id, so the stored row must carry it unchanged
            cheer.client_ref = Some(client_ref);
        }
        let now = Utc::now();

        match self.ctx.cheer_repo().insert(&cheer).await {
            Ok(stored) => {
                info!(cheer_id = %stored.id, "Cheer posted");
                self.ctx.publisher().cheer_posted(&stored).await;
                Ok(CheerResponse::from_cheer(&stored, now))
            }
            Err(e) => {
                warn!(error = %e, "Cheer insert failed; returning local fallback");
                let local = cheer.into_local_fallback(now.timestamp_millis());
                Ok(CheerResponse::from_cheer(&local, now))
            }
        }
    }
}
