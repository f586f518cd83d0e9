//! Configuration management for the Gong client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Gong client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Gong API access key
  pub access_key: String,

  /// Gong API access key secret
  pub access_key_secret: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the Gong API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let access_key = env::var("GONG_ACCESS_KEY")
      .map_err(|_| Error::Credentials("GONG_ACCESS_KEY not set".to_string()))?;

    let access_key_secret = env::var("GONG_ACCESS_KEY_SECRET")
      .map_err(|_| Error::Credentials("GONG_ACCESS_KEY_SECRET not set".to_string()))?;

    let timeout_secs = env::var("GONG_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid GONG_TIMEOUT_SECS".to_string()))?;

    let base_url = env::var("GONG_BASE_URL").unwrap_or_else(|_| crate::GONG_BASE_URL.to_string());

    Ok(Config { access_key, access_key_secret, timeout_secs, base_url })
  }

  /// Create a config from an access key pair, with defaults for the rest
  pub fn default_with_keys(access_key: String, access_key_secret: String) -> Self {
    Config {
      access_key,
      access_key_secret,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::GONG_BASE_URL.to_string(),
    }
  }
}
