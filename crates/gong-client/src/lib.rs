//! # gong-client
//!
//! A typed Rust client for the Gong v2 REST API.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Type Safe**: Strongly typed requests and responses using gong-models
//! - **Basic Auth**: Auth token generated once from an access key pair
//! - **Configurable**: Environment-based configuration via gong-core
//! - **Transparent**: Every response carries the raw HTTP status and body
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gong_client::{CallFilter, GongClient};
//! use gong_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = GongClient::new(config)?;
//!
//!     // List calls in a workspace
//!     let filter = CallFilter { workspace_id: Some("w1".into()), ..Default::default() };
//!     let response = client.calls().list(&filter).await?;
//!
//!     if let Some(page) = response.record {
//!         println!("Fetched {} of {} calls", page.calls.len(), page.records.total_records);
//!     } else {
//!         println!("Request rejected with status {}", response.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! The client does not page on its own. Each listing response carries a
//! `records` envelope; pass its `cursor` back in the next request until it
//! comes back absent.
//!
//! ## Error Handling
//!
//! HTTP-level rejections are not errors: the typed record is simply absent
//! and the caller inspects the status. `Result` errors surface transport
//! failures and responses that cannot be hydrated into the expected type,
//! as `gong_core::Error`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::GongClient;
pub use gong_core::{Config, Error, Result};
pub use gong_models::*;
pub use transport::ApiResponse;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{calls::CallsEndpoints, users::UsersEndpoints};
