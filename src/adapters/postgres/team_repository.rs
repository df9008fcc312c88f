//! PostgreSQL implementation of TeamRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, TeamMemberId, Timestamp};
use crate::domain::team::TeamMember;
use crate::ports::TeamRepository;

/// PostgreSQL implementation of TeamRepository.
#[derive(Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, role, bio, photo_url, specialties,
                   display_order, created_at, updated_at
            FROM team_members
            ORDER BY display_order ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list team members: {}", e)))?;

        Ok(rows.iter().map(row_to_member).collect())
    }

    async fn find_by_id(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, role, bio, photo_url, specialties,
                   display_order, created_at, updated_at
            FROM team_members
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch team member: {}", e)))?;

        Ok(row.as_ref().map(row_to_member))
    }

    async fn insert(&self, member: &TeamMember) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO team_members (
                id, name, role, bio, photo_url, specialties,
                display_order, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.bio)
        .bind(&member.photo_url)
        .bind(&member.specialties)
        .bind(member.display_order)
        .bind(member.created_at.as_datetime())
        .bind(member.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert team member: {}", e)))?;

        Ok(())
    }

    async fn update(&self, member: &TeamMember) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE team_members SET
                name = $2,
                role = $3,
                bio = $4,
                photo_url = $5,
                specialties = $6,
                display_order = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.bio)
        .bind(&member.photo_url)
        .bind(&member.specialties)
        .bind(member.display_order)
        .bind(member.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update team member: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TeamMemberNotFound,
                format!("Team member {} not found", member.id),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: &TeamMemberId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete team member: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TeamMemberNotFound,
                format!("Team member {} not found", id),
            ));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM team_members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count team members: {}", e)))?;

        let count: i64 = row.get("total");
        Ok(count as u64)
    }
}

fn row_to_member(row: &sqlx::postgres::PgRow) -> TeamMember {
    let id: uuid::Uuid = row.get("id");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    TeamMember {
        id: TeamMemberId::from_uuid(id),
        name: row.get("name"),
        role: row.get("role"),
        bio: row.get("bio"),
        photo_url: row.get("photo_url"),
        specialties: row.get("specialties"),
        display_order: row.get("display_order"),
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    }
}
