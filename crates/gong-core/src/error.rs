use thiserror::Error;

/// The main error type for gong-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Credential error
  #[error("Failed to build API credentials: {0}")]
  Credentials(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error")]
  ParseDate(#[from] chrono::ParseError),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// General unexpected error
  #[error("Unexpected error: {0}")]
  Unexpected(String),
}

/// Result type alias for gong-* crates
pub type Result<T> = std::result::Result<T, Error>;
