//! Team member entity for the studio's "about us" content.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeamMemberId, Timestamp, ValidationError};

/// One member of the design team as presented on the website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo_url: Option<String>,
    pub specialties: Vec<String>,
    /// Position in the team listing, lowest first.
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TeamMember {
    /// Creates a new team member, validating required fields.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        bio: impl Into<String>,
        photo_url: Option<String>,
        specialties: Vec<String>,
        display_order: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let role = role.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if role.trim().is_empty() {
            return Err(ValidationError::empty_field("role"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: TeamMemberId::new(),
            name,
            role,
            bio: bio.into(),
            photo_url,
            specialties,
            display_order,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies an update, refreshing the modification timestamp.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        bio: impl Into<String>,
        photo_url: Option<String>,
        specialties: Vec<String>,
        display_order: i32,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let role = role.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if role.trim().is_empty() {
            return Err(ValidationError::empty_field("role"));
        }

        self.name = name;
        self.role = role;
        self.bio = bio.into();
        self.photo_url = photo_url;
        self.specialties = specialties;
        self.display_order = display_order;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TeamMember {
        TeamMember::new(
            "Maria Lind",
            "Lead Designer",
            "Ten years of residential design.",
            None,
            vec!["scandinavian".to_string(), "minimalist".to_string()],
            1,
        )
        .unwrap()
    }

    #[test]
    fn new_member_carries_provided_fields() {
        let member = sample();
        assert_eq!(member.name, "Maria Lind");
        assert_eq!(member.role, "Lead Designer");
        assert_eq!(member.specialties.len(), 2);
        assert_eq!(member.created_at, member.updated_at);
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = TeamMember::new("  ", "Designer", "", None, vec![], 0);
        assert!(result.is_err());
    }

    #[test]
    fn empty_role_is_rejected() {
        let result = TeamMember::new("Maria", "", "", None, vec![], 0);
        assert!(result.is_err());
    }

    #[test]
    fn update_refreshes_timestamp() {
        let mut member = sample();
        let created = member.created_at;

        member
            .update("Maria Lind", "Principal", "Updated bio.", None, vec![], 2)
            .unwrap();

        assert_eq!(member.role, "Principal");
        assert_eq!(member.display_order, 2);
        assert_eq!(member.created_at, created);
        assert!(!member.updated_at.is_before(&created));
    }

    #[test]
    fn update_rejects_empty_name() {
        let mut member = sample();
        assert!(member.update("", "Principal", "", None, vec![], 0).is_err());
    }
}
