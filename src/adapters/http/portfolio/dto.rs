//! DTOs for the portfolio endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::portfolio::PortfolioProject;
use crate::ports::ProjectFilter;

/// One portfolio project as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub style_key: String,
    pub room_type: String,
    pub image_urls: Vec<String>,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl ProjectView {
    /// Builds a view from the domain entity.
    pub fn from_project(project: &PortfolioProject) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title.clone(),
            description: project.description.clone(),
            style_key: project.style_key.clone(),
            room_type: project.room_type.clone(),
            image_urls: project.image_urls.clone(),
            featured: project.featured,
            created_at: project.created_at.to_rfc3339(),
            updated_at: project.updated_at.to_rfc3339(),
        }
    }
}

/// Request body for creating or updating a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub style_key: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Query parameters for listing projects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProjectsParams {
    /// Restrict to a single design style key.
    pub style: Option<String>,
    /// Restrict to featured projects.
    pub featured: Option<bool>,
}

impl ListProjectsParams {
    /// Converts query parameters into a repository filter.
    pub fn to_filter(&self) -> ProjectFilter {
        ProjectFilter {
            style_key: self.style.clone(),
            featured: self.featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_convert_to_filter() {
        let params = ListProjectsParams {
            style: Some("modern".to_string()),
            featured: Some(true),
        };
        let filter = params.to_filter();
        assert_eq!(filter.style_key.as_deref(), Some("modern"));
        assert_eq!(filter.featured, Some(true));
    }

    #[test]
    fn missing_params_produce_empty_filter() {
        let filter = ListProjectsParams::default().to_filter();
        assert!(filter.is_empty());
    }

    #[test]
    fn request_applies_defaults() {
        let json = r#"{"title":"Loft","styleKey":"modern"}"#;
        let request: ProjectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.description, "");
        assert!(request.image_urls.is_empty());
        assert!(!request.featured);
    }
}
