//! Atlas clusters
//!
//! A cluster is a managed database deployment inside a group. Creation is
//! asynchronous server-side; the client returns as soon as the initial
//! response arrives and never polls for completion.
//!
//! Item paths are keyed by cluster *name* (the container API keys by id -
//! an inherited inconsistency of the remote API, preserved here).

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{AtlasClient, ResultsEnvelope};
use crate::error::Result;

/// Provider placement for a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    pub provider_name: String,
    pub region_name: String,
    pub instance_size_name: String,
    #[serde(rename = "diskIOPS", skip_serializing_if = "Option::is_none")]
    pub disk_iops: Option<i64>,
    #[serde(rename = "encryptEBSVolume", skip_serializing_if = "Option::is_none")]
    pub encrypt_ebs_volume: Option<bool>,
}

/// Autoscaling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScaling {
    #[serde(rename = "diskGBEnabled", skip_serializing_if = "Option::is_none")]
    pub disk_gb_enabled: Option<bool>,
}

/// BI connector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiConnector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_preference: Option<String>,
}

/// Fields the caller supplies when creating or updating a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInput {
    pub name: String,
    #[serde(rename = "mongoDBMajorVersion")]
    pub mongo_db_major_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,
    pub provider_settings: ProviderSettings,
    pub backup_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<AutoScaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u8>,
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bi_connector: Option<BiConnector>,
}

/// A cluster as returned by the server, including server-assigned fields.
/// Empty keys are omitted on the wire, so everything is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "mongoDBMajorVersion", skip_serializing_if = "Option::is_none")]
    pub mongo_db_major_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_settings: Option<ProviderSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<AutoScaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u8>,
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bi_connector: Option<BiConnector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "mongoURI", skip_serializing_if = "Option::is_none")]
    pub mongo_uri: Option<String>,
    #[serde(rename = "mongoURIUpdated", skip_serializing_if = "Option::is_none")]
    pub mongo_uri_updated: Option<String>,
    #[serde(rename = "mongoURIWithOptions", skip_serializing_if = "Option::is_none")]
    pub mongo_uri_with_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
}

impl AtlasClient {
    /// List all clusters in the active group
    pub async fn list_clusters(&self) -> Result<Vec<ClusterOutput>> {
        let raw = self
            .request(
                Method::GET,
                &self.group_url("clusters"),
                String::new(),
                StatusCode::OK,
            )
            .await?;

        let page: ResultsEnvelope<ClusterOutput> = serde_json::from_slice(&raw)?;
        Ok(page.results)
    }

    /// Fetch one cluster by name
    pub async fn get_cluster(&self, name: &str) -> Result<ClusterOutput> {
        let url = self.group_url(&format!("clusters/{name}"));
        let raw = self
            .request(Method::GET, &url, String::new(), StatusCode::OK)
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }

    /// Create a cluster. The server answers as soon as provisioning has
    /// been accepted; the returned record carries `stateName: "CREATING"`
    /// until the deployment is up. A `None` input still performs the call
    /// with a `null` body.
    pub async fn create_cluster(&self, cluster: Option<&ClusterInput>) -> Result<ClusterOutput> {
        let body = serde_json::to_string(&cluster)?;
        let raw = self
            .request(
                Method::POST,
                &self.group_url("clusters"),
                body,
                StatusCode::CREATED,
            )
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }

    /// Update a cluster. The item path is keyed by the name carried in the
    /// input record.
    pub async fn update_cluster(&self, cluster: &ClusterInput) -> Result<ClusterOutput> {
        let body = serde_json::to_string(cluster)?;
        let url = self.group_url(&format!("clusters/{}", cluster.name));
        let raw = self
            .request(Method::PATCH, &url, body, StatusCode::OK)
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }

    /// Delete a cluster by name. The server accepts the teardown (202) and
    /// finishes it asynchronously; there is no payload.
    pub async fn delete_cluster(&self, name: &str) -> Result<()> {
        let url = self.group_url(&format!("clusters/{name}"));
        self.request(Method::DELETE, &url, String::new(), StatusCode::ACCEPTED)
            .await?;

        Ok(())
    }
}
