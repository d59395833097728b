use serde::Serialize;

use models::{ApiError, Page, Project, ProjectDraft};

use crate::ApiClient;

/// Optional filters for the project list endpoint.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// List projects, optionally filtered by status/city and paged.
pub async fn list(client: &ApiClient, query: &ProjectQuery) -> Result<Page<Project>, ApiError> {
    client.get_json_query("/projects", query).await
}

/// Fetch one project by its public code.
pub async fn get_by_code(client: &ApiClient, code: &str) -> Result<Project, ApiError> {
    client.get_json(&format!("/projects/{code}")).await
}

pub async fn create(client: &ApiClient, draft: &ProjectDraft) -> Result<Project, ApiError> {
    client.post_json("/projects", draft).await
}

pub async fn update(client: &ApiClient, id: i64, draft: &ProjectDraft) -> Result<Project, ApiError> {
    client.put_json(&format!("/projects/{id}"), draft).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client.delete_text(&format!("/projects/{id}")).await
}
