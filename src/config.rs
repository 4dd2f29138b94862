//! Configuration management for TaskForge.
//!
//! Loads configuration from environment variables:
//! - Server bind address
//! - Backend profile (local demo store or remote upstream proxy)
//! - Session verification secret

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub auth: AuthConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub mode: BackendMode,
    /// Base URL of the upstream service when running in remote mode.
    pub upstream_url: String,
}

/// Which backend serves entity operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendMode {
    /// In-process demo store.
    #[default]
    Local,
    /// Proxy to an upstream HTTP backend.
    Remote,
}

impl std::str::FromStr for BackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            _ => Err(format!("Unknown backend mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 secret for verifying session tokens issued by the identity
    /// provider. When unset the auth gate is left open (demo profile).
    pub session_secret: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Seed the local store with demo records at startup.
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: env_or("PORT", "8080").parse().expect("Invalid PORT"),
            },
            backend: BackendConfig {
                mode: env_or("BACKEND_MODE", "local").parse().unwrap_or_default(),
                upstream_url: env_or("UPSTREAM_URL", "http://localhost:8000"),
            },
            auth: AuthConfig {
                session_secret: env::var("SESSION_SECRET").ok(),
            },
            store: StoreConfig {
                seed_demo: env_or("SEED_DEMO_DATA", "true").to_lowercase() != "false",
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_mode_parsing() {
        assert_eq!("local".parse::<BackendMode>().unwrap(), BackendMode::Local);
        assert_eq!("REMOTE".parse::<BackendMode>().unwrap(), BackendMode::Remote);
        assert!("sqlite".parse::<BackendMode>().is_err());
    }
}
