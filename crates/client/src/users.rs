use serde::Serialize;

use models::{ApiError, CreateUser, User};

use crate::ApiClient;

pub async fn list(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get_json("/users").await
}

pub async fn get(client: &ApiClient, user_id: &str) -> Result<User, ApiError> {
    client.get_json(&format!("/users/{user_id}")).await
}

/// Create a staff account. A wire quirk of the backend: the fields travel
/// as query parameters with an empty body, and the reply is a plain
/// message.
pub async fn create(client: &ApiClient, user: &CreateUser) -> Result<String, ApiError> {
    client.post_query("/users", user).await
}

#[derive(Serialize)]
struct EmailPatch<'a> {
    email: &'a str,
}

/// Update a staff account's email (query parameter, like `create`).
pub async fn update(client: &ApiClient, user_id: &str, email: &str) -> Result<String, ApiError> {
    client.put_query(&format!("/users/{user_id}"), &EmailPatch { email }).await
}

pub async fn delete(client: &ApiClient, user_id: &str) -> Result<String, ApiError> {
    client.delete_text(&format!("/users/{user_id}")).await
}
