//! Configuration module for the photo-sales backend.
//!
//! All configuration is loaded from environment variables with sensible
//! defaults.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key gating the admin surface (gallery creation etc.)
    pub admin_psk: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Seed the demo catalog at startup
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_psk = env::var("PEAKPLAY_ADMIN_PSK").ok();

        let bind_addr = env::var("PEAKPLAY_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid PEAKPLAY_BIND_ADDR format");

        let log_level = env::var("PEAKPLAY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_demo = env::var("PEAKPLAY_SEED_DEMO")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Self {
            admin_psk,
            bind_addr,
            log_level,
            seed_demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("PEAKPLAY_ADMIN_PSK");
        env::remove_var("PEAKPLAY_BIND_ADDR");
        env::remove_var("PEAKPLAY_LOG_LEVEL");
        env::remove_var("PEAKPLAY_SEED_DEMO");

        let config = Config::from_env();

        assert!(config.admin_psk.is_none());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo);
    }
}
