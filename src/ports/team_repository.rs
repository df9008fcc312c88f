//! Team repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TeamMemberId};
use crate::domain::team::TeamMember;

/// Repository port for team member persistence.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All team members ordered by display order, then name.
    async fn list(&self) -> Result<Vec<TeamMember>, DomainError>;

    /// Find a team member by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError>;

    /// Insert a new team member.
    async fn insert(&self, member: &TeamMember) -> Result<(), DomainError>;

    /// Update an existing team member.
    ///
    /// # Errors
    ///
    /// - `TeamMemberNotFound` if the member doesn't exist
    async fn update(&self, member: &TeamMember) -> Result<(), DomainError>;

    /// Delete a team member.
    ///
    /// # Errors
    ///
    /// - `TeamMemberNotFound` if the member doesn't exist
    async fn delete(&self, id: &TeamMemberId) -> Result<(), DomainError>;

    /// Total number of team members.
    async fn count(&self) -> Result<u64, DomainError>;
}
