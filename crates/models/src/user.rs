use serde::{Deserialize, Serialize};

/// A staff account as exposed by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub enabled: bool,
    pub email_verified: bool,
    pub created_timestamp: i64,
    #[serde(default)]
    pub attributes: Option<UserAttributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(default)]
    pub role: Vec<String>,
}

/// New-account payload. The backend takes these as query parameters, not a
/// JSON body; serialization order follows the declaration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}
