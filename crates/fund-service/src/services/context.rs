//! Service context - dependency container for services
//!
//! Holds the repository ports, the event publisher, and campaign settings.
//! Everything behind a trait object so tests can swap in in-memory
//! implementations.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use fund_common::CampaignConfig;
use fund_core::traits::{CheerRepository, EventPublisher, PledgeRepository, PreferenceStore};

use super::checkout::PendingTransfer;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repository ports (pledges, cheers)
/// - The preference store (theme)
/// - The insert-event publisher
/// - Campaign settings (goal, feed limit, gateway delay)
#[derive(Clone)]
pub struct ServiceContext {
    pledge_repo: Arc<dyn PledgeRepository>,
    cheer_repo: Arc<dyn CheerRepository>,
    preference_store: Arc<dyn PreferenceStore>,
    publisher: Arc<dyn EventPublisher>,
    campaign: CampaignConfig,

    /// Bank transfers submitted but not yet confirmed, keyed by payment token.
    ///
    /// In-memory and process-local: an abandoned transfer stays in the map
    /// until the process restarts. Confirmation across restarts or entry
    /// expiry would need a store-backed table with a TTL.
    pending_transfers: Arc<RwLock<HashMap<String, PendingTransfer>>>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pledge_repo: Arc<dyn PledgeRepository>,
        cheer_repo: Arc<dyn CheerRepository>,
        preference_store: Arc<dyn PreferenceStore>,
        publisher: Arc<dyn EventPublisher>,
        campaign: CampaignConfig,
    ) -> Self {
        Self {
            pledge_repo,
            cheer_repo,
            preference_store,
            publisher,
            campaign,
            pending_transfers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the pledge repository
    pub fn pledge_repo(&self) -> &dyn PledgeRepository {
        self.pledge_repo.as_ref()
    }

    /// Get the cheer repository
    pub fn cheer_repo(&self) -> &dyn CheerRepository {
        self.cheer_repo.as_ref()
    }

    /// Get the preference store
    pub fn preference_store(&self) -> &dyn PreferenceStore {
        self.preference_store.as_ref()
    }

    /// Get the insert-event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    /// Get the campaign settings
    pub fn campaign(&self) -> &CampaignConfig {
        &self.campaign
    }

    pub(crate) fn pending_transfers(&self) -> &RwLock<HashMap<String, PendingTransfer>> {
        &self.pending_transfers
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("campaign", &self.campaign)
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pledge_repo: Option<Arc<dyn PledgeRepository>>,
    cheer_repo: Option<Arc<dyn CheerRepository>>,
    preference_store: Option<Arc<dyn PreferenceStore>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    campaign: Option<CampaignConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pledge_repo(mut self, repo: Arc<dyn PledgeRepository>) -> Self {
        self.pledge_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn cheer_repo(mut self, repo: Arc<dyn CheerRepository>) -> Self {
        self.cheer_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn preference_store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.preference_store = Some(store);
        self
    }

    #[must_use]
    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    #[must_use]
    pub fn campaign(mut self, campaign: CampaignConfig) -> Self {
        self.campaign = Some(campaign);
        self
    }

    /// Build the context
    ///
    /// # Errors
    /// Returns an error naming the first missing dependency.
    pub fn build(self) -> Result<ServiceContext, &'static str> {
        Ok(ServiceContext::new(
            self.pledge_repo.ok_or("pledge_repo is required")?,
            self.cheer_repo.ok_or("cheer_repo is required")?,
            self.preference_store.ok_or("preference_store is required")?,
            self.publisher.ok_or("publisher is required")?,
            self.campaign.unwrap_or_default(),
        ))
    }
}
