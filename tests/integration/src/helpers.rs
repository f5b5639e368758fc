//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers against in-memory stores and
//! making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use fund_api::{create_app, AppState};
use fund_common::{
    AppConfig, AppSettings, CampaignConfig, CorsConfig, DatabaseConfig, Environment, RedisConfig,
    ServerConfig,
};
use fund_core::events::InsertRecord;
use fund_service::ServiceContextBuilder;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::fixtures::{
    BroadcastPublisher, MemoryCheerStore, MemoryPledgeStore, MemoryPreferenceStore,
};

/// Buffer size for the test event broadcast
const TEST_EVENT_BUFFER: usize = 64;

/// Test server instance backed by in-memory stores
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pledges: Arc<MemoryPledgeStore>,
    pub cheers: Arc<MemoryCheerStore>,
    events: broadcast::Sender<InsertRecord>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the default test configuration
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with a custom configuration
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let pledges = Arc::new(MemoryPledgeStore::new());
        let cheers = Arc::new(MemoryCheerStore::new());
        let preferences = Arc::new(MemoryPreferenceStore::new());

        let (events, _) = broadcast::channel(TEST_EVENT_BUFFER);
        let publisher = Arc::new(BroadcastPublisher::new(events.clone()));

        let service_context = ServiceContextBuilder::new()
            .pledge_repo(pledges.clone())
            .cheer_repo(cheers.clone())
            .preference_store(preferences)
            .publisher(publisher)
            .campaign(config.campaign.clone())
            .build()
            .map_err(|e| anyhow::anyhow!("Context error: {}", e))?;

        let state = AppState::new(service_context, events.clone(), config);
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            pledges,
            cheers,
            events,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Subscribe to the insert-event broadcast the server publishes into
    pub fn subscribe_events(&self) -> broadcast::Receiver<InsertRecord> {
        self.events.subscribe()
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.put(&url).json(body).send().await?)
    }
}

/// Create a test configuration with instant gateway confirmation
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "fund-server-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        redis: RedisConfig {
            url: "redis://unused".to_string(),
            max_connections: 1,
        },
        campaign: CampaignConfig {
            gateway_delay_ms: 0,
            ..CampaignConfig::default()
        },
        cors: CorsConfig::default(),
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
