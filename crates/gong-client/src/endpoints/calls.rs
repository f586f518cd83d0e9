//! Call endpoints: listing, extensive details, and transcripts

use crate::transport::{ApiResponse, Transport};
use gong_core::wire::WireRecord;
use gong_core::Result;
use gong_models::calls::*;
use std::sync::Arc;
use tracing::instrument;

/// Call endpoints for listing calls and fetching details and transcripts
pub struct CallsEndpoints {
    transport: Arc<Transport>,
}

impl CallsEndpoints {
    /// Create a new call endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List calls matching the filter criteria
    ///
    /// # Arguments
    ///
    /// * `filter` - Date bounds, call ids, user ids, and workspace to match;
    ///   unset fields are not sent
    ///
    /// # Examples
    ///
    /// ```ignore
    /// # let endpoints = client.calls();
    /// let filter = CallFilter { workspace_id: Some("w1".into()), ..Default::default() };
    /// let page = endpoints.list(&filter).await?;
    /// # Ok::<(), gong_core::Error>(())
    /// ```
    #[instrument(skip(self, filter))]
    pub async fn list(&self, filter: &CallFilter) -> Result<ApiResponse<CallsResponse>> {
        let params = filter.to_map()?;
        self.transport.get("/v2/calls", Some(params)).await
    }

    /// Fetch extensive call details
    ///
    /// The request's content selector controls which sections of each call
    /// come back populated.
    #[instrument(skip(self, request))]
    pub async fn details(
        &self,
        request: &CallDetailsRequest,
    ) -> Result<ApiResponse<CallDetailsResponse>> {
        let body = request.to_map()?;
        self.transport.post("/v2/calls/extensive", Some(body)).await
    }

    /// Fetch call transcripts matching the filter criteria
    #[instrument(skip(self, filter))]
    pub async fn transcripts(
        &self,
        filter: &TranscriptFilter,
    ) -> Result<ApiResponse<TranscriptResponse>> {
        let body = filter.to_map()?;
        self.transport.post("/v2/calls/transcript", Some(body)).await
    }
}
