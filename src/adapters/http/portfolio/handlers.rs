//! HTTP handlers for portfolio endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::foundation::ProjectId;
use crate::domain::portfolio::PortfolioProject;
use crate::ports::PortfolioRepository;

use super::super::error::ApiError;
use super::dto::{ListProjectsParams, ProjectRequest, ProjectView};

/// Shared application state for portfolio handlers.
#[derive(Clone)]
pub struct PortfolioAppState {
    pub repo: Arc<dyn PortfolioRepository>,
}

impl PortfolioAppState {
    /// Creates a new PortfolioAppState.
    pub fn new(repo: Arc<dyn PortfolioRepository>) -> Self {
        Self { repo }
    }
}

/// GET /api/portfolio - List projects, optionally filtered.
///
/// # Query Parameters
/// - `style`: restrict to a design style key
/// - `featured`: restrict to featured projects
pub async fn list_projects(
    State(state): State<PortfolioAppState>,
    Query(params): Query<ListProjectsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = state
        .repo
        .list(&params.to_filter())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let views: Vec<ProjectView> = projects.iter().map(ProjectView::from_project).collect();
    Ok((StatusCode::OK, Json(views)))
}

/// GET /api/portfolio/{id} - Get one project.
///
/// # Errors
/// - 400 Bad Request: malformed id
/// - 404 Not Found: no such project
pub async fn get_project(
    State(state): State<PortfolioAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProjectId = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid project ID format".to_string()))?;

    let project = state
        .repo
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("Project".to_string(), id.to_string()))?;

    Ok((StatusCode::OK, Json(ProjectView::from_project(&project))))
}

/// POST /api/portfolio - Create a project.
///
/// # Errors
/// - 400 Bad Request: empty title or unknown style key
pub async fn create_project(
    State(state): State<PortfolioAppState>,
    Json(request): Json<ProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let project = PortfolioProject::new(
        request.title,
        request.description,
        request.style_key,
        request.room_type,
        request.image_urls,
        request.featured,
    )
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .repo
        .insert(&project)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(ProjectView::from_project(&project))))
}

/// PUT /api/portfolio/{id} - Update a project.
///
/// # Errors
/// - 400 Bad Request: malformed id, empty title, or unknown style key
/// - 404 Not Found: no such project
pub async fn update_project(
    State(state): State<PortfolioAppState>,
    Path(id): Path<String>,
    Json(request): Json<ProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProjectId = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid project ID format".to_string()))?;

    let mut project = state
        .repo
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("Project".to_string(), id.to_string()))?;

    project
        .update(
            request.title,
            request.description,
            request.style_key,
            request.room_type,
            request.image_urls,
            request.featured,
        )
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .repo
        .update(&project)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((StatusCode::OK, Json(ProjectView::from_project(&project))))
}

/// DELETE /api/portfolio/{id} - Delete a project.
///
/// # Errors
/// - 400 Bad Request: malformed id
/// - 404 Not Found: no such project
pub async fn delete_project(
    State(state): State<PortfolioAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let parsed: ProjectId = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid project ID format".to_string()))?;

    state
        .repo
        .find_by_id(&parsed)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("Project".to_string(), id.clone()))?;

    state
        .repo
        .delete(&parsed)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}
