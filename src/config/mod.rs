mod app_config;

pub use app_config::{AppConfig, AssetConfig, AuthConfig, LogFormat, LoggingConfig, ServerConfig};
