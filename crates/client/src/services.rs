use serde::Serialize;

use models::{ApiError, Page, Service, ServiceDraft};

use crate::ApiClient;

/// Plain paging parameters shared by endpoints without extra filters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

pub async fn list(client: &ApiClient, query: &PageQuery) -> Result<Page<Service>, ApiError> {
    client.get_json_query("/services", query).await
}

/// Fetch one service by display name. The name is the routable identifier
/// and gets percent-encoded into the path ("Interior Design" becomes
/// `/services/Interior%20Design`).
pub async fn get_by_name(client: &ApiClient, name: &str) -> Result<Service, ApiError> {
    client.get_json(&format!("/services/{}", urlencoding::encode(name))).await
}

pub async fn create(client: &ApiClient, draft: &ServiceDraft) -> Result<Service, ApiError> {
    client.post_json("/services", draft).await
}

pub async fn update(client: &ApiClient, id: i64, draft: &ServiceDraft) -> Result<Service, ApiError> {
    client.put_json(&format!("/services/{id}"), draft).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client.delete_text(&format!("/services/{id}")).await
}
