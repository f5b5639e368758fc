//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CampaignConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RedisConfig, ServerConfig,
};
