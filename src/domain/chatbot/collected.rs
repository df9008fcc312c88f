//! Accumulated consultation answers and per-conversation context.
//!
//! `CollectedData` is append-only per conversation: a field is only ever
//! overwritten by a later answer to the same step, never cleared.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::{budget_label, timeline_label};
use super::step::ConversationStep;

/// Structured answers gathered so far in one consultation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectedData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl CollectedData {
    /// Returns true if no answer has been recorded yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if both contact sub-phases have been answered.
    pub fn contact_complete(&self) -> bool {
        self.name.is_some() && self.email.is_some()
    }

    /// Overlays every field present in `other` onto `self`.
    ///
    /// Fields absent in `other` are left untouched, preserving the
    /// append-only property.
    pub fn merge_from(&mut self, other: &CollectedData) {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field.clone();
                })*
            };
        }
        overlay!(
            project_type,
            room_type,
            design_style,
            budget,
            timeline,
            room_size,
            name,
            email,
            phone,
            additional_notes
        );
    }

    /// The budget band's display label, when a band has been recorded.
    pub fn budget_display(&self) -> Option<&'static str> {
        self.budget.as_deref().and_then(budget_label)
    }

    /// The timeline band's display label, when a band has been recorded.
    pub fn timeline_display(&self) -> Option<&'static str> {
        self.timeline.as_deref().and_then(timeline_label)
    }
}

/// The full mutable state of one conversation.
///
/// Owned by the conversation store; the orchestrator holds it only for the
/// duration of one message-processing call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversationContext {
    pub current_step: ConversationStep,
    pub collected_data: CollectedData,
    pub user_preferences: HashMap<String, String>,
}

impl ConversationContext {
    /// The state a brand-new conversation starts in.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Returns true if the questionnaire has finished.
    pub fn is_complete(&self) -> bool {
        self.current_step.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod collected_data {
        use super::*;

        #[test]
        fn default_is_empty() {
            assert!(CollectedData::default().is_empty());
        }

        #[test]
        fn any_recorded_field_makes_it_non_empty() {
            let data = CollectedData {
                room_type: Some("kitchen".to_string()),
                ..Default::default()
            };
            assert!(!data.is_empty());
        }

        #[test]
        fn merge_overlays_present_fields_only() {
            let mut data = CollectedData {
                project_type: Some("residential".to_string()),
                room_type: Some("kitchen".to_string()),
                ..Default::default()
            };
            let update = CollectedData {
                room_type: Some("bedroom".to_string()),
                design_style: Some("modern".to_string()),
                ..Default::default()
            };

            data.merge_from(&update);

            // Re-answering the same step overwrites; absence never clears.
            assert_eq!(data.project_type.as_deref(), Some("residential"));
            assert_eq!(data.room_type.as_deref(), Some("bedroom"));
            assert_eq!(data.design_style.as_deref(), Some("modern"));
        }

        #[test]
        fn merge_from_empty_changes_nothing() {
            let mut data = CollectedData {
                name: Some("John".to_string()),
                ..Default::default()
            };
            let before = data.clone();
            data.merge_from(&CollectedData::default());
            assert_eq!(data, before);
        }

        #[test]
        fn contact_complete_requires_name_and_email() {
            let mut data = CollectedData::default();
            assert!(!data.contact_complete());

            data.name = Some("John".to_string());
            assert!(!data.contact_complete());

            data.email = Some("john@example.com".to_string());
            assert!(data.contact_complete());
        }

        #[test]
        fn display_labels_resolve_from_band_keys() {
            let data = CollectedData {
                budget: Some("10k-25k".to_string()),
                timeline: Some("3-6-months".to_string()),
                ..Default::default()
            };
            assert_eq!(data.budget_display(), Some("$10,000 - $25,000"));
            assert_eq!(data.timeline_display(), Some("3-6 months"));
        }

        #[test]
        fn serializes_to_camel_case_and_skips_absent_fields() {
            let data = CollectedData {
                project_type: Some("residential".to_string()),
                ..Default::default()
            };
            let json = serde_json::to_string(&data).unwrap();
            assert!(json.contains(r#""projectType":"residential""#));
            assert!(!json.contains("roomType"));
        }
    }

    mod context {
        use super::*;

        #[test]
        fn initial_context_starts_at_greeting_with_no_data() {
            let context = ConversationContext::initial();
            assert_eq!(context.current_step, ConversationStep::Greeting);
            assert!(context.collected_data.is_empty());
            assert!(context.user_preferences.is_empty());
        }

        #[test]
        fn complete_step_marks_context_complete() {
            let context = ConversationContext {
                current_step: ConversationStep::Complete,
                ..Default::default()
            };
            assert!(context.is_complete());
        }

        #[test]
        fn context_roundtrips_through_json() {
            let context = ConversationContext {
                current_step: ConversationStep::Budget,
                collected_data: CollectedData {
                    room_type: Some("kitchen".to_string()),
                    ..Default::default()
                },
                user_preferences: HashMap::new(),
            };
            let json = serde_json::to_string(&context).unwrap();
            assert!(json.contains(r#""currentStep":"budget""#));

            let back: ConversationContext = serde_json::from_str(&json).unwrap();
            assert_eq!(back, context);
        }
    }
}
