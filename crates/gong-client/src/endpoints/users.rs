//! User lookup endpoint

use crate::transport::{ApiResponse, Transport};
use gong_core::Result;
use gong_models::users::UserResponse;
use std::sync::Arc;
use tracing::instrument;

/// User endpoints for looking up Gong users
pub struct UsersEndpoints {
    transport: Arc<Transport>,
}

impl UsersEndpoints {
    /// Create a new user endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Look up a single user by id
    ///
    /// # Examples
    ///
    /// ```ignore
    /// # let endpoints = client.users();
    /// let user = endpoints.get("234599484848423358").await?;
    /// # Ok::<(), gong_core::Error>(())
    /// ```
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: &str) -> Result<ApiResponse<UserResponse>> {
        self.transport.get(&format!("/v2/users/{user_id}"), None).await
    }
}
