use serde::{Deserialize, Serialize};

/// A service offering (e.g. "Interior Design"). The name doubles as the
/// routable identifier and must be URL-encoded when used in a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update payload for a service offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
}
