use serde::{Deserialize, Serialize};

/// A visitor-submitted lead, optionally tied to a project by code. Status
/// and assignment are managed by staff elsewhere; the client only creates
/// and lists these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: i64,
    pub project_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub created_at: String,
}

/// Payload for creating an enquiry from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnquiry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Staff-side patch for an existing enquiry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnquiry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

/// Trimmed page shape returned by the enquiry list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryPage {
    pub content: Vec<Enquiry>,
    pub total_elements: u64,
}
