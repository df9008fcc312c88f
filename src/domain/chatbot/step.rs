//! Conversation step state machine.
//!
//! Defines the fixed questionnaire sequence the consultation chatbot walks
//! a visitor through, from greeting to the completed brief.

use serde::{Deserialize, Serialize};

/// One phase of the consultation questionnaire.
///
/// Steps advance in a fixed order; only `contact_info` has sub-phases
/// (name, then email) before moving on. `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStep {
    /// Opening exchange, advances on any input.
    #[default]
    Greeting,

    /// Residential, commercial, or renovation.
    ProjectType,

    /// Which room is being designed.
    RoomType,

    /// One of the studio's design styles.
    DesignStyle,

    /// Budget band for the project.
    Budget,

    /// Expected project timeline.
    Timeline,

    /// Approximate size of the space, free text.
    RoomSize,

    /// Visitor name, then email (two sub-phases).
    ContactInfo,

    /// Free-text notes, completes the brief.
    AdditionalNotes,

    /// Brief finished, conversation is read-only.
    Complete,
}

impl ConversationStep {
    /// The canonical questionnaire order.
    pub fn sequence() -> [ConversationStep; 10] {
        use ConversationStep::*;
        [
            Greeting,
            ProjectType,
            RoomType,
            DesignStyle,
            Budget,
            Timeline,
            RoomSize,
            ContactInfo,
            AdditionalNotes,
            Complete,
        ]
    }

    /// Returns true if this is the terminal step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Returns true if this step records the raw message verbatim,
    /// skipping the intent-confidence gate entirely.
    pub fn records_verbatim(&self) -> bool {
        matches!(self, Self::RoomSize | Self::AdditionalNotes)
    }

    /// Returns a short label for logging and UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::ProjectType => "project_type",
            Self::RoomType => "room_type",
            Self::DesignStyle => "design_style",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::RoomSize => "room_size",
            Self::ContactInfo => "contact_info",
            Self::AdditionalNotes => "additional_notes",
            Self::Complete => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod step_definition {
        use super::*;

        #[test]
        fn default_step_is_greeting() {
            assert_eq!(ConversationStep::default(), ConversationStep::Greeting);
        }

        #[test]
        fn serializes_to_snake_case() {
            let step = ConversationStep::ProjectType;
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, "\"project_type\"");
        }

        #[test]
        fn deserializes_from_snake_case() {
            let step: ConversationStep = serde_json::from_str("\"contact_info\"").unwrap();
            assert_eq!(step, ConversationStep::ContactInfo);
        }

        #[test]
        fn sequence_starts_at_greeting_and_ends_at_complete() {
            let seq = ConversationStep::sequence();
            assert_eq!(seq.first(), Some(&ConversationStep::Greeting));
            assert_eq!(seq.last(), Some(&ConversationStep::Complete));
            assert_eq!(seq.len(), 10);
        }

        #[test]
        fn labels_match_wire_names() {
            for step in ConversationStep::sequence() {
                let json = serde_json::to_string(&step).unwrap();
                assert_eq!(json, format!("\"{}\"", step.label()));
            }
        }
    }

    mod step_predicates {
        use super::*;

        #[test]
        fn only_complete_is_terminal() {
            for step in ConversationStep::sequence() {
                assert_eq!(step.is_terminal(), step == ConversationStep::Complete);
            }
        }

        #[test]
        fn room_size_records_verbatim() {
            assert!(ConversationStep::RoomSize.records_verbatim());
        }

        #[test]
        fn additional_notes_records_verbatim() {
            assert!(ConversationStep::AdditionalNotes.records_verbatim());
        }

        #[test]
        fn choice_steps_do_not_record_verbatim() {
            for step in [
                ConversationStep::Greeting,
                ConversationStep::ProjectType,
                ConversationStep::RoomType,
                ConversationStep::DesignStyle,
                ConversationStep::Budget,
                ConversationStep::Timeline,
                ConversationStep::ContactInfo,
                ConversationStep::Complete,
            ] {
                assert!(!step.records_verbatim(), "{:?}", step);
            }
        }
    }
}
