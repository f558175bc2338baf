//! Atlas network peering containers (VPCs)
//!
//! A container is the VPC-peering construct attached to a group. Item paths
//! are keyed by container *id*, unlike clusters which key by name; that
//! asymmetry comes from the remote API and is kept as-is.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{AtlasClient, ResultsEnvelope};
use crate::error::Result;

/// Fields the caller supplies when creating or updating a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atlas_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

/// A container as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atlas_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_provisioned: Option<bool>,
}

impl AtlasClient {
    /// List all containers in the active group
    pub async fn list_containers(&self) -> Result<Vec<ContainerOutput>> {
        let raw = self
            .request(
                Method::GET,
                &self.group_url("containers"),
                String::new(),
                StatusCode::OK,
            )
            .await?;

        let page: ResultsEnvelope<ContainerOutput> = serde_json::from_slice(&raw)?;
        Ok(page.results)
    }

    /// Fetch one container by id
    pub async fn get_container(&self, container_id: &str) -> Result<ContainerOutput> {
        let url = self.group_url(&format!("containers/{container_id}"));
        let raw = self
            .request(Method::GET, &url, String::new(), StatusCode::OK)
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }

    /// Create a container. A `None` input still performs the call with a
    /// `null` body; the server's rejection surfaces as a status mismatch.
    pub async fn create_container(
        &self,
        container: Option<&ContainerInput>,
    ) -> Result<ContainerOutput> {
        let body = serde_json::to_string(&container)?;
        let raw = self
            .request(
                Method::POST,
                &self.group_url("containers"),
                body,
                StatusCode::CREATED,
            )
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }

    /// Update a container by id
    pub async fn update_container(
        &self,
        container_id: &str,
        container: Option<&ContainerInput>,
    ) -> Result<ContainerOutput> {
        let body = serde_json::to_string(&container)?;
        let url = self.group_url(&format!("containers/{container_id}"));
        let raw = self
            .request(Method::PATCH, &url, body, StatusCode::OK)
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_uses_camel_case_wire_keys() {
        let input = ContainerInput {
            atlas_cidr_block: Some("10.0.0.0/24".to_string()),
            provider_name: Some("AWS".to_string()),
            region_name: None,
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"atlasCidrBlock":"10.0.0.0/24","providerName":"AWS"}"#
        );
    }

    #[test]
    fn test_output_decodes_provisioning_state() {
        let output: ContainerOutput = serde_json::from_str(
            r#"{
                "id": "1112269b3bf99403840e8934",
                "providerName": "AWS",
                "atlasCidrBlock": "10.0.0.0/24",
                "regionName": "US_EAST_1",
                "vpcId": "awesome-vpc",
                "isProvisioned": true
            }"#,
        )
        .unwrap();

        assert_eq!(output.vpc_id.as_deref(), Some("awesome-vpc"));
        assert_eq!(output.is_provisioned, Some(true));
    }
}
