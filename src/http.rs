//! HTTP transport for Atlas REST API calls
//!
//! One shared request path: build a digest-authenticated request, execute
//! it, read the full body, and compare the status code against the value
//! the operation expects.

use diqwest::WithDigestAuth;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};

use crate::error::{Error, Result};

/// HTTP client wrapper speaking the digest-authenticated Atlas protocol
#[derive(Clone)]
pub struct AtlasHttpClient {
    client: Client,
}

impl AtlasHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("atlas-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Execute one request and return the raw response body.
    ///
    /// The body may be empty (GET/DELETE). The digest flow sends the request
    /// once and, on a 401 challenge, retries with the computed
    /// `Authorization` header. Any other status is returned as-is and then
    /// checked against `expected`; on mismatch the raw body text travels
    /// with the error so the caller can diagnose the rejection.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        body: String,
        expected: StatusCode,
        username: &str,
        api_key: &str,
    ) -> Result<Vec<u8>> {
        tracing::debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send_with_digest_auth(username, api_key)
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status != expected {
            return Err(Error::RequestFailed {
                status,
                expected,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}
