//! HTTP handlers for team endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::foundation::TeamMemberId;
use crate::domain::team::TeamMember;
use crate::ports::TeamRepository;

use super::super::error::ApiError;
use super::dto::{TeamMemberRequest, TeamMemberView};

/// Shared application state for team handlers.
#[derive(Clone)]
pub struct TeamAppState {
    pub repo: Arc<dyn TeamRepository>,
}

impl TeamAppState {
    /// Creates a new TeamAppState.
    pub fn new(repo: Arc<dyn TeamRepository>) -> Self {
        Self { repo }
    }
}

/// GET /api/team - List all team members.
pub async fn list_members(
    State(state): State<TeamAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let members = state
        .repo
        .list()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let views: Vec<TeamMemberView> = members.iter().map(TeamMemberView::from_member).collect();
    Ok((StatusCode::OK, Json(views)))
}

/// GET /api/team/{id} - Get one team member.
///
/// # Errors
/// - 400 Bad Request: malformed id
/// - 404 Not Found: no such member
pub async fn get_member(
    State(state): State<TeamAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: TeamMemberId = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid team member ID format".to_string()))?;

    let member = state
        .repo
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("Team member".to_string(), id.to_string()))?;

    Ok((StatusCode::OK, Json(TeamMemberView::from_member(&member))))
}

/// POST /api/team - Create a team member.
///
/// # Errors
/// - 400 Bad Request: empty name or role
pub async fn create_member(
    State(state): State<TeamAppState>,
    Json(request): Json<TeamMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let member = TeamMember::new(
        request.name,
        request.role,
        request.bio,
        request.photo_url,
        request.specialties,
        request.display_order,
    )
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .repo
        .insert(&member)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(TeamMemberView::from_member(&member))))
}

/// PUT /api/team/{id} - Update a team member.
///
/// # Errors
/// - 400 Bad Request: malformed id, empty name or role
/// - 404 Not Found: no such member
pub async fn update_member(
    State(state): State<TeamAppState>,
    Path(id): Path<String>,
    Json(request): Json<TeamMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: TeamMemberId = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid team member ID format".to_string()))?;

    let mut member = state
        .repo
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("Team member".to_string(), id.to_string()))?;

    member
        .update(
            request.name,
            request.role,
            request.bio,
            request.photo_url,
            request.specialties,
            request.display_order,
        )
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .repo
        .update(&member)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((StatusCode::OK, Json(TeamMemberView::from_member(&member))))
}

/// DELETE /api/team/{id} - Delete a team member.
///
/// # Errors
/// - 400 Bad Request: malformed id
/// - 404 Not Found: no such member
pub async fn delete_member(
    State(state): State<TeamAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let parsed: TeamMemberId = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid team member ID format".to_string()))?;

    state
        .repo
        .find_by_id(&parsed)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("Team member".to_string(), id.clone()))?;

    state
        .repo
        .delete(&parsed)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Simple in-memory repository mock.
    #[derive(Default)]
    struct MockTeamRepo {
        members: Mutex<Vec<TeamMember>>,
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepo {
        async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
            Ok(self.members.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
            Ok(self
                .members
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.id == id)
                .cloned())
        }

        async fn insert(&self, member: &TeamMember) -> Result<(), DomainError> {
            self.members.lock().unwrap().push(member.clone());
            Ok(())
        }

        async fn update(&self, member: &TeamMember) -> Result<(), DomainError> {
            let mut members = self.members.lock().unwrap();
            if let Some(existing) = members.iter_mut().find(|m| m.id == member.id) {
                *existing = member.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: &TeamMemberId) -> Result<(), DomainError> {
            self.members.lock().unwrap().retain(|m| &m.id != id);
            Ok(())
        }

        async fn count(&self) -> Result<u64, DomainError> {
            Ok(self.members.lock().unwrap().len() as u64)
        }
    }

    fn state() -> TeamAppState {
        TeamAppState::new(Arc::new(MockTeamRepo::default()))
    }

    fn request(name: &str, role: &str) -> TeamMemberRequest {
        TeamMemberRequest {
            name: name.to_string(),
            role: role.to_string(),
            bio: String::new(),
            photo_url: None,
            specialties: vec![],
            display_order: 0,
        }
    }

    #[tokio::test]
    async fn create_then_list_roundtrips() {
        let state = state();

        let created = create_member(State(state.clone()), Json(request("Maria", "Designer"))).await;
        assert!(created.is_ok());

        let listed = list_members(State(state)).await;
        assert!(listed.is_ok());
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let result = create_member(State(state()), Json(request("", "Designer"))).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn get_unknown_member_is_not_found() {
        let result = get_member(State(state()), Path(TeamMemberId::new().to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_, _))));
    }

    #[tokio::test]
    async fn get_malformed_id_is_bad_request() {
        let result = get_member(State(state()), Path("not-a-uuid".to_string())).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn delete_unknown_member_is_not_found() {
        let result = delete_member(State(state()), Path(TeamMemberId::new().to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_, _))));
    }
}
