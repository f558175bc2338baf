//! Atlas projects (groups)
//!
//! Projects are the top-level organizational unit; clusters and containers
//! live inside one. The API addresses them both by id and by name.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{AtlasClient, ResultsEnvelope};
use crate::error::Result;

/// Fields the caller supplies when creating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

/// A project as returned by the server. The server omits empty keys, so
/// every field is optional; `None` means the key was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

/// Hyperlink reference attached to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

impl AtlasClient {
    /// List all projects visible to the credentials
    pub async fn list_projects(&self) -> Result<Vec<ProjectOutput>> {
        let raw = self
            .request(Method::GET, &self.groups_url(), String::new(), StatusCode::OK)
            .await?;

        let page: ResultsEnvelope<ProjectOutput> = serde_json::from_slice(&raw)?;
        Ok(page.results)
    }

    /// Fetch one project by its group id
    pub async fn get_project(&self, group_id: &str) -> Result<ProjectOutput> {
        let url = format!("{}/{}", self.groups_url(), group_id);
        let raw = self
            .request(Method::GET, &url, String::new(), StatusCode::OK)
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }

    /// Fetch one project by its name
    pub async fn get_project_by_name(&self, name: &str) -> Result<ProjectOutput> {
        let url = format!("{}/byName/{}", self.groups_url(), name);
        let raw = self
            .request(Method::GET, &url, String::new(), StatusCode::OK)
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }

    /// Create a project. A `None` input still performs the call with a
    /// `null` body; whether the server accepts that is its contract.
    pub async fn create_project(&self, project: Option<&ProjectInput>) -> Result<ProjectOutput> {
        let body = serde_json::to_string(&project)?;
        let raw = self
            .request(Method::POST, &self.groups_url(), body, StatusCode::CREATED)
            .await?;

        Ok(serde_json::from_slice(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_omits_absent_fields() {
        let input = ProjectInput {
            name: Some("shiny".to_string()),
            org_id: None,
        };
        assert_eq!(serde_json::to_string(&input).unwrap(), r#"{"name":"shiny"}"#);
    }

    #[test]
    fn test_absent_input_serializes_to_null() {
        assert_eq!(serde_json::to_string(&None::<&ProjectInput>).unwrap(), "null");
    }

    #[test]
    fn test_output_distinguishes_absent_from_zero() {
        let output: ProjectOutput =
            serde_json::from_str(r#"{"name":"shiny","clusterCount":0}"#).unwrap();
        assert_eq!(output.cluster_count, Some(0));
        assert_eq!(output.id, None);
    }

    #[test]
    fn test_output_decodes_links() {
        let output: ProjectOutput = serde_json::from_str(
            r#"{"id":"abc","links":[{"href":"https://cloud.mongodb.com/api/atlas/v1.0/groups/abc","rel":"self"}]}"#,
        )
        .unwrap();
        let links = output.links.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rel.as_deref(), Some("self"));
    }
}
