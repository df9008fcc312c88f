//! PostgreSQL implementation of PortfolioRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, Timestamp};
use crate::domain::portfolio::PortfolioProject;
use crate::ports::{PortfolioRepository, ProjectFilter};

/// PostgreSQL implementation of PortfolioRepository.
#[derive(Clone)]
pub struct PostgresPortfolioRepository {
    pool: PgPool,
}

impl PostgresPortfolioRepository {
    /// Creates a new PostgresPortfolioRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for PostgresPortfolioRepository {
    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<PortfolioProject>, DomainError> {
        // NULL filter parameters match everything.
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, style_key, room_type,
                   image_urls, featured, created_at, updated_at
            FROM portfolio_projects
            WHERE ($1::text IS NULL OR style_key = $1)
              AND ($2::boolean IS NULL OR featured = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(&filter.style_key)
        .bind(filter.featured)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list projects: {}", e)))?;

        Ok(rows.iter().map(row_to_project).collect())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<PortfolioProject>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, style_key, room_type,
                   image_urls, featured, created_at, updated_at
            FROM portfolio_projects
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch project: {}", e)))?;

        Ok(row.as_ref().map(row_to_project))
    }

    async fn insert(&self, project: &PortfolioProject) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO portfolio_projects (
                id, title, description, style_key, room_type,
                image_urls, featured, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(project.id.as_uuid())
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.style_key)
        .bind(&project.room_type)
        .bind(&project.image_urls)
        .bind(project.featured)
        .bind(project.created_at.as_datetime())
        .bind(project.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert project: {}", e)))?;

        Ok(())
    }

    async fn update(&self, project: &PortfolioProject) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE portfolio_projects SET
                title = $2,
                description = $3,
                style_key = $4,
                room_type = $5,
                image_urls = $6,
                featured = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(project.id.as_uuid())
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.style_key)
        .bind(&project.room_type)
        .bind(&project.image_urls)
        .bind(project.featured)
        .bind(project.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update project: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project {} not found", project.id),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM portfolio_projects WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete project: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project {} not found", id),
            ));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM portfolio_projects")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count projects: {}", e)))?;

        let count: i64 = row.get("total");
        Ok(count as u64)
    }
}

fn row_to_project(row: &sqlx::postgres::PgRow) -> PortfolioProject {
    let id: uuid::Uuid = row.get("id");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    PortfolioProject {
        id: ProjectId::from_uuid(id),
        title: row.get("title"),
        description: row.get("description"),
        style_key: row.get("style_key"),
        room_type: row.get("room_type"),
        image_urls: row.get("image_urls"),
        featured: row.get("featured"),
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    }
}
