use serde::Serialize;

use models::{ApiError, CreateEnquiry, Enquiry, EnquiryPage, UpdateEnquiry};

use crate::ApiClient;

/// Optional filters for the staff-side enquiry list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnquiryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// Submit a visitor enquiry from the contact form.
pub async fn create(client: &ApiClient, enquiry: &CreateEnquiry) -> Result<Enquiry, ApiError> {
    client.post_json("/enquiries", enquiry).await
}

pub async fn list(client: &ApiClient, query: &EnquiryQuery) -> Result<EnquiryPage, ApiError> {
    client.get_json_query("/enquiries", query).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    patch: &UpdateEnquiry,
) -> Result<Enquiry, ApiError> {
    client.put_json(&format!("/enquiries/{id}"), patch).await
}
