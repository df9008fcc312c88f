//! Portfolio project entity for the public gallery.

use serde::{Deserialize, Serialize};

use crate::domain::chatbot::catalog::is_style_key;
use crate::domain::foundation::{ProjectId, Timestamp, ValidationError};

/// One completed project showcased in the portfolio.
///
/// The style key ties gallery entries to the same reference table the
/// chatbot matches against, so filters and consultation answers line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub style_key: String,
    pub room_type: String,
    pub image_urls: Vec<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PortfolioProject {
    /// Creates a new portfolio project, validating required fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        style_key: impl Into<String>,
        room_type: impl Into<String>,
        image_urls: Vec<String>,
        featured: bool,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let style_key = style_key.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if !is_style_key(&style_key) {
            return Err(ValidationError::invalid_format(
                "style_key",
                format!("'{}' is not a known design style", style_key),
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: ProjectId::new(),
            title,
            description: description.into(),
            style_key,
            room_type: room_type.into(),
            image_urls,
            featured,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies an update, refreshing the modification timestamp.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        style_key: impl Into<String>,
        room_type: impl Into<String>,
        image_urls: Vec<String>,
        featured: bool,
    ) -> Result<(), ValidationError> {
        let title = title.into();
        let style_key = style_key.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if !is_style_key(&style_key) {
            return Err(ValidationError::invalid_format(
                "style_key",
                format!("'{}' is not a known design style", style_key),
            ));
        }

        self.title = title;
        self.description = description.into();
        self.style_key = style_key;
        self.room_type = room_type.into();
        self.image_urls = image_urls;
        self.featured = featured;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
