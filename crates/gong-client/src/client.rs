/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Top-level Gong API client wiring the endpoint groups over a shared transport.

use crate::endpoints::{calls::CallsEndpoints, users::UsersEndpoints};
use crate::transport::Transport;
use gong_core::{Config, Result};
use std::sync::Arc;

/// Main Gong API client
///
/// Provides access to the Gong v2 endpoints through organized endpoint
/// modules. Handles authentication and transport concerns; pagination is
/// left to the caller, who loops on the `records` cursor.
///
/// # Examples
///
/// ```ignore
/// use gong_client::{CallFilter, GongClient};
/// use gong_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = GongClient::new(config)?;
///
///     // List calls in a workspace
///     let filter = CallFilter { workspace_id: Some("w1".into()), ..Default::default() };
///     let calls = client.calls().list(&filter).await?;
///
///     // Look up the host of the first call
///     if let Some(page) = calls.record {
///         let user = client.users().get(&page.calls[0].primary_user_id).await?;
///         println!("Host: {:?}", user.record.map(|r| r.user.email_address));
///     }
///
///     Ok(())
/// }
/// ```
pub struct GongClient {
    transport: Arc<Transport>,
}

impl GongClient {
    /// Create a new Gong API client
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration containing the access key pair and base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or the access
    /// key pair cannot form a valid auth header.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use gong_client::GongClient;
    /// use gong_core::Config;
    ///
    /// let config = Config::from_env().expect("Missing access keys");
    /// let client = GongClient::new(config).expect("Failed to create client");
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self { transport: Arc::new(Transport::new(&config)?) })
    }

    /// Get access to call endpoints
    ///
    /// Returns a `CallsEndpoints` instance for listing calls and fetching
    /// extensive call details and transcripts.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// # let client = GongClient::new(Config::from_env().unwrap()).unwrap();
    /// let calls = client.calls().list(&CallFilter::default()).await?;
    /// # Ok::<(), gong_core::Error>(())
    /// ```
    pub fn calls(&self) -> CallsEndpoints {
        CallsEndpoints::new(self.transport.clone())
    }

    /// Get access to user endpoints
    ///
    /// Returns a `UsersEndpoints` instance for looking up users.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// # let client = GongClient::new(Config::from_env().unwrap()).unwrap();
    /// let user = client.users().get("234599484848423358").await?;
    /// # Ok::<(), gong_core::Error>(())
    /// ```
    pub fn users(&self) -> UsersEndpoints {
        UsersEndpoints::new(self.transport.clone())
    }
}

impl std::fmt::Debug for GongClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GongClient").field("transport", &self.transport).finish()
    }
}
