use serde::{Deserialize, Serialize};

/// Build status of a project. Closed set; the backend never sends anything
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    UnderConstruction,
    Completed,
}

/// A construction project as listed on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub city: String,
    pub project_status: ProjectStatus,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub updated_at: String,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

/// Partial project payload for create/update calls. Only present fields are
/// sent; the backend fills the rest.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// One gallery image of a project. `sort_order` is a display hint; ordering
/// is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    pub id: i64,
    pub url: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub sort_order: i32,
    pub hero: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_screaming_snake_on_the_wire() {
        let s = serde_json::to_string(&ProjectStatus::UnderConstruction).unwrap();
        assert_eq!(s, r#""UNDER_CONSTRUCTION""#);
        let back: ProjectStatus = serde_json::from_str(r#""COMPLETED""#).unwrap();
        assert_eq!(back, ProjectStatus::Completed);
    }

    #[test]
    fn status_rejects_values_outside_the_closed_set() {
        let res: Result<ProjectStatus, _> = serde_json::from_str(r#""PLANNED""#);
        assert!(res.is_err());
    }

    #[test]
    fn project_decodes_with_optional_fields_absent() {
        let body = r#"{
            "id": 1,
            "code": "JVC-001",
            "name": "Lakeview Residency",
            "city": "Chennai",
            "projectStatus": "UNDER_CONSTRUCTION",
            "updatedAt": "2025-02-11T08:00:00Z"
        }"#;
        let p: Project = serde_json::from_str(body).unwrap();
        assert_eq!(p.code, "JVC-001");
        assert!(p.hero_image_url.is_none());
        assert!(p.images.is_empty());
    }
}
