//! DTOs for the team endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::team::TeamMember;

/// One team member as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo_url: Option<String>,
    pub specialties: Vec<String>,
    pub display_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl TeamMemberView {
    /// Builds a view from the domain entity.
    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name.clone(),
            role: member.role.clone(),
            bio: member.bio.clone(),
            photo_url: member.photo_url.clone(),
            specialties: member.specialties.clone(),
            display_order: member.display_order,
            created_at: member.created_at.to_rfc3339(),
            updated_at: member.updated_at.to_rfc3339(),
        }
    }
}

/// Request body for creating or updating a team member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberRequest {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub display_order: i32,
}
