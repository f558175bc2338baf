//! Atlas client handle
//!
//! Holds the endpoint, the digest credentials, and the active group
//! (project) id that scopes cluster and container paths. The group id is
//! explicit configuration on the handle, never process-wide state.

use reqwest::{Method, StatusCode};
use serde::Deserialize;

use crate::error::Result;
use crate::http::AtlasHttpClient;

/// Path prefix of the Atlas administration API
const API_BASE_PATH: &str = "/api/atlas/v1.0";

/// Main Atlas client
#[derive(Clone)]
pub struct AtlasClient {
    pub base_url: String,
    pub username: String,
    pub api_key: String,
    /// Active group (project) id used by group-scoped operations.
    /// Empty until set via [`with_group`](Self::with_group) or
    /// [`switch_group`](Self::switch_group).
    pub group_id: String,
    http: AtlasHttpClient,
}

impl AtlasClient {
    /// Create a new Atlas client
    pub fn new(base_url: &str, username: &str, api_key: &str) -> Result<Self> {
        let http = AtlasHttpClient::new()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            api_key: api_key.to_string(),
            group_id: String::new(),
            http,
        })
    }

    /// Set the active group id, builder-style
    pub fn with_group(mut self, group_id: &str) -> Self {
        self.switch_group(group_id);
        self
    }

    /// Switch to a different group (project)
    pub fn switch_group(&mut self, group_id: &str) {
        self.group_id = group_id.to_string();
    }

    /// Build the projects collection URL
    pub fn groups_url(&self) -> String {
        format!("{}{}/groups", self.base_url, API_BASE_PATH)
    }

    /// Build a URL scoped to the active group, e.g. `clusters/my-cluster`
    pub fn group_url(&self, resource: &str) -> String {
        format!("{}/{}/{}", self.groups_url(), self.group_id, resource)
    }

    /// Issue one request with this handle's credentials
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        body: String,
        expected: StatusCode,
    ) -> Result<Vec<u8>> {
        self.http
            .request(method, url, body, expected, &self.username, &self.api_key)
            .await
    }
}

/// Wrapper object the server puts around every list response. A response
/// without the `results` key fails to decode, which is the contract.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultsEnvelope<T> {
    pub results: Vec<T>,
}
