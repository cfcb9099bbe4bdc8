//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote PCDentro REST API (login and CRUD endpoints)
    pub api_base_url: String,

    /// Path of the durable session store file
    pub session_store_path: String,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            api_base_url: env::var("API_BASE_URL")
                .map_err(|_| anyhow::anyhow!("API_BASE_URL is required"))?,

            session_store_path: env::var("SESSION_STORE_PATH")
                .unwrap_or_else(|_| ".pcdentro-session.json".to_string()),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "pcdentro=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
