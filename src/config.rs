// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development. When `BACKEND_URL` is
//! unset the service runs against the in-memory store.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_RECOMMENDATION_DELAY_MS: u64 = 1000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Hosted backend base URL; `None` selects the in-memory store
    pub backend_url: Option<String>,
    /// Service key for the hosted backend's REST interface
    pub backend_api_key: String,
    /// Shared secret used to verify session JWTs (HS256)
    pub jwt_secret: Vec<u8>,
    /// Park catalog file; the bundled catalog is used when unset
    pub parks_data_path: Option<String>,
    /// Cosmetic delay before recommendation responses
    pub recommendation_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let backend_url = optional_var("BACKEND_URL");
        let backend_api_key = match &backend_url {
            Some(_) => env::var("BACKEND_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("BACKEND_API_KEY"))?,
            None => String::new(),
        };

        Ok(Self {
            port: parse_var("PORT", DEFAULT_PORT)?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            backend_url,
            backend_api_key,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET"))?
                .into_bytes(),
            parks_data_path: optional_var("PARKS_DATA_PATH"),
            recommendation_delay_ms: parse_var(
                "RECOMMENDATION_DELAY_MS",
                DEFAULT_RECOMMENDATION_DELAY_MS,
            )?,
        })
    }

    /// Config for tests: in-memory backend and no artificial delay.
    pub fn test_default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            backend_url: None,
            backend_api_key: String::new(),
            jwt_secret: b"test_jwt_secret_32_bytes_minimum!".to_vec(),
            parks_data_path: None,
            recommendation_delay_ms: 0,
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match optional_var(name) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name, raw)),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
