pub mod config;
pub mod error;
pub mod wire;

pub use config::Config;
pub use error::{Error, Result};

/// Base URL for the Gong API
pub const GONG_BASE_URL: &str = "https://api.gong.io";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
