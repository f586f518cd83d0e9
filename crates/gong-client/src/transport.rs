//! HTTP transport layer for Gong API requests

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gong_core::wire::{translate, WireRecord};
use gong_core::{Config, Error, Result};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Raw HTTP outcome paired with the optionally-hydrated typed record.
///
/// A non-2xx status is not an error at this layer: `record` is `None` and
/// the caller decides what the status means. The unparsed response text is
/// always kept in `body`.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status returned by the API
    pub status: StatusCode,

    /// Raw response body text
    pub body: String,

    /// The hydrated record, present on a 2xx response
    pub record: Option<T>,
}

impl<T> ApiResponse<T> {
    /// True when the response status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP transport for making requests to the Gong API
///
/// The reqwest client and the basic-auth header are both built once at
/// construction and never mutated, so a transport can be shared freely
/// across tasks.
#[derive(Debug)]
pub struct Transport {
    client: Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("gong-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

        let auth_header = basic_auth_header(&config.access_key, &config.access_key_secret)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        let config = Config {
            access_key: "test_key".to_string(),
            access_key_secret: "test_secret".to_string(),
            timeout_secs: 30,
            base_url: "https://mock.gong.io".to_string(),
        };

        Self::new(&config).expect("mock transport")
    }

    /// Make one request against the API.
    ///
    /// `params` are outbound-translated and sent as query parameters; when
    /// no params are given, `body` is outbound-translated and sent as JSON.
    /// On a 2xx status the response body is parsed, normalized through the
    /// inbound translator, and hydrated into `T`; a parse or hydration
    /// failure is an error. Any other status returns the raw response with
    /// no record and no error.
    #[instrument(skip(self, body, params), fields(method = %method, path))]
    pub async fn request<T: WireRecord>(
        &self,
        method: Method,
        path: &str,
        body: Option<Map<String, Value>>,
        params: Option<Map<String, Value>>,
    ) -> Result<ApiResponse<T>> {
        let send_body = params.is_none();
        let url = self.build_url(path, params)?;
        debug!("Making request to: {url}");

        let mut request =
            self.client.request(method, url).header(AUTHORIZATION, self.auth_header.clone());

        if send_body {
            if let Some(body) = body {
                request = request.json(&translate::outbound(Value::Object(body)));
            }
        }

        let response =
            request.send().await.map_err(|e| Error::Http(format!("Request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

        debug!("Response status: {status}, body length: {} bytes", text.len());

        if !status.is_success() {
            return Ok(ApiResponse { status, body: text, record: None });
        }

        let raw: Value = serde_json::from_str(&text)?;
        let record = T::from_map(translate::inbound(raw))?;

        Ok(ApiResponse { status, body: text, record: Some(record) })
    }

    /// Make a GET request with optional query parameters
    pub async fn get<T: WireRecord>(
        &self,
        path: &str,
        params: Option<Map<String, Value>>,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::GET, path, None, params).await
    }

    /// Make a POST request with an optional JSON body
    pub async fn post<T: WireRecord>(
        &self,
        path: &str,
        body: Option<Map<String, Value>>,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::POST, path, body, None).await
    }

    /// Build the full URL for an API request
    fn build_url(&self, path: &str, params: Option<Map<String, Value>>) -> Result<String> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))
            .map_err(|e| Error::Http(format!("Invalid request URL: {e}")))?;

        if let Some(params) = params {
            if let Value::Object(pairs) = translate::outbound(Value::Object(params)) {
                if !pairs.is_empty() {
                    let mut query_pairs = url.query_pairs_mut();
                    for (key, value) in pairs {
                        match value {
                            // Sequence params repeat the key, one pair per element
                            Value::Array(items) => {
                                for item in items {
                                    query_pairs.append_pair(&key, &query_value(&item));
                                }
                            }
                            other => {
                                query_pairs.append_pair(&key, &query_value(&other));
                            }
                        }
                    }
                }
            }
        }

        Ok(url.to_string())
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Precompute the `Authorization: Basic <token>` header value from an
/// access key pair. The token is base64 of `accessKey:accessKeySecret`.
fn basic_auth_header(access_key: &str, access_key_secret: &str) -> Result<HeaderValue> {
    let token = STANDARD.encode(format!("{access_key}:{access_key_secret}"));

    let mut header = HeaderValue::from_str(&format!("Basic {token}"))
        .map_err(|e| Error::Credentials(format!("access key pair is not header-safe: {e}")))?;
    header.set_sensitive(true);

    Ok(header)
}

/// Render one query value the way it reads on the wire.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
