//! Portfolio repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::portfolio::PortfolioProject;

/// Filter for portfolio listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    /// Restrict to a single design style key.
    pub style_key: Option<String>,
    /// Restrict to featured projects.
    pub featured: Option<bool>,
}

impl ProjectFilter {
    /// Returns true if no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.style_key.is_none() && self.featured.is_none()
    }

    /// Returns true if `project` satisfies the filter.
    pub fn matches(&self, project: &PortfolioProject) -> bool {
        if let Some(style) = &self.style_key {
            if &project.style_key != style {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if project.featured != featured {
                return false;
            }
        }
        true
    }
}

/// Repository port for portfolio project persistence.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Projects matching the filter, newest first.
    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<PortfolioProject>, DomainError>;

    /// Find a project by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<PortfolioProject>, DomainError>;

    /// Insert a new project.
    async fn insert(&self, project: &PortfolioProject) -> Result<(), DomainError>;

    /// Update an existing project.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn update(&self, project: &PortfolioProject) -> Result<(), DomainError>;

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError>;

    /// Total number of projects.
    async fn count(&self) -> Result<u64, DomainError>;
}
