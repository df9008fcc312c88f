//! Step response generator.
//!
//! Given a matched intent, the raw message, and the current context,
//! produces the bot's reply, the next step, and the field writes it
//! proposes. The generator never mutates shared state; the orchestrator
//! decides which proposed writes are committed.

use super::catalog::{
    budget_label, style_description, BUDGET_BANDS, DESIGN_STYLES, ROOM_TYPES, TIMELINE_BANDS,
};
use super::collected::{CollectedData, ConversationContext};
use super::intent::Intent;
use super::step::ConversationStep;

/// Follow-up hints returned once the questionnaire completes.
pub static NEXT_STEPS: &[&str] = &[
    "A designer will review your brief and email you within one business day",
    "Browse our portfolio for inspiration while you wait",
    "Gather photos or floor plans of your space to share during the consultation",
];

/// The generator's output for one inbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResponse {
    /// The bot's reply text.
    pub message: String,
    /// The step the conversation should move to.
    pub next_step: ConversationStep,
    /// True once the questionnaire has finished.
    pub is_complete: bool,
    /// Follow-up hints, present only at completion.
    pub next_steps: Option<Vec<String>>,
    /// Field writes proposed for this step; committing them is the
    /// orchestrator's decision.
    pub proposed: CollectedData,
}

impl StepResponse {
    fn advance(message: String, next_step: ConversationStep) -> Self {
        Self {
            message,
            next_step,
            is_complete: false,
            next_steps: None,
            proposed: CollectedData::default(),
        }
    }

    fn stay(message: String, current: ConversationStep) -> Self {
        Self::advance(message, current)
    }

    fn proposing(mut self, proposed: CollectedData) -> Self {
        self.proposed = proposed;
        self
    }
}

/// Produces the bot's response for one message.
///
/// Dispatch is keyed by the conversation's current step, not by the
/// intent; each step decides for itself what the intent means.
pub fn generate(intent: &Intent, raw_text: &str, context: &ConversationContext) -> StepResponse {
    match context.current_step {
        ConversationStep::Greeting => respond_greeting(intent),
        ConversationStep::ProjectType => respond_project_type(intent),
        ConversationStep::RoomType => respond_room_type(intent),
        ConversationStep::DesignStyle => respond_design_style(intent),
        ConversationStep::Budget => respond_budget(intent),
        ConversationStep::Timeline => respond_timeline(intent),
        ConversationStep::RoomSize => respond_room_size(raw_text),
        ConversationStep::ContactInfo => respond_contact_info(intent, raw_text, context),
        ConversationStep::AdditionalNotes => respond_additional_notes(raw_text, context),
        ConversationStep::Complete => respond_complete(),
    }
}

fn respond_greeting(intent: &Intent) -> StepResponse {
    let message = if intent.kind == "greeting" {
        format!(
            "Hello! Welcome to Atelier, we'd love to help you shape your space. \
             To get started: is your project {}?",
            project_type_options()
        )
    } else {
        format!(
            "Welcome to Atelier! Let's put together a design brief for you. \
             First: is your project {}?",
            project_type_options()
        )
    };
    StepResponse::advance(message, ConversationStep::ProjectType)
}

fn respond_project_type(intent: &Intent) -> StepResponse {
    match intent.kind.as_str() {
        kind @ ("residential" | "commercial" | "renovation") => {
            let message = format!(
                "Great, a {} project! Which room are we designing? \
                 We work on: {}.",
                kind,
                ROOM_TYPES.join(", ")
            );
            StepResponse::advance(message, ConversationStep::RoomType).proposing(CollectedData {
                project_type: Some(kind.to_string()),
                ..Default::default()
            })
        }
        _ => StepResponse::stay(
            format!(
                "I want to point you to the right designer. \
                 Is your project {}?",
                project_type_options()
            ),
            ConversationStep::ProjectType,
        ),
    }
}

fn respond_room_type(intent: &Intent) -> StepResponse {
    if ROOM_TYPES.contains(&intent.kind.as_str()) {
        let message = format!(
            "{} is a wonderful space to work with. Which design style speaks to you?\n\n{}",
            capitalize(&intent.kind),
            style_menu()
        );
        StepResponse::advance(message, ConversationStep::DesignStyle).proposing(CollectedData {
            room_type: Some(intent.kind.clone()),
            ..Default::default()
        })
    } else {
        StepResponse::stay(
            format!(
                "Which room should we focus on? We design: {}.",
                ROOM_TYPES.join(", ")
            ),
            ConversationStep::RoomType,
        )
    }
}

fn respond_design_style(intent: &Intent) -> StepResponse {
    match style_description(&intent.kind) {
        Some(description) => {
            let message = format!(
                "{} it is: {}.\n\nWhat budget range are you working with?\n{}",
                capitalize(&intent.kind),
                description,
                budget_menu()
            );
            StepResponse::advance(message, ConversationStep::Budget).proposing(CollectedData {
                design_style: Some(intent.kind.clone()),
                ..Default::default()
            })
        }
        _ => StepResponse::stay(
            format!(
                "I didn't catch a style there. Our designers work across: {}. \
                 Which one fits your vision?",
                style_names()
            ),
            ConversationStep::DesignStyle,
        ),
    }
}

fn respond_budget(intent: &Intent) -> StepResponse {
    match budget_label(&intent.kind) {
        Some(label) => {
            let message = format!(
                "Perfect, {} gives us a clear frame to design within. \
                 What timeline did you have in mind?\n{}",
                label,
                timeline_menu()
            );
            StepResponse::advance(message, ConversationStep::Timeline).proposing(CollectedData {
                budget: Some(intent.kind.clone()),
                ..Default::default()
            })
        }
        _ => StepResponse::stay(
            format!(
                "Could you give me a budget range? For example:\n{}",
                budget_menu()
            ),
            ConversationStep::Budget,
        ),
    }
}

fn respond_timeline(intent: &Intent) -> StepResponse {
    match super::catalog::timeline_label(&intent.kind) {
        Some(label) => {
            let message = format!(
                "{} works well. Roughly how large is the space? \
                 A ballpark like \"200 sq ft\" is fine.",
                label
            );
            StepResponse::advance(message, ConversationStep::RoomSize).proposing(CollectedData {
                timeline: Some(intent.kind.clone()),
                ..Default::default()
            })
        }
        _ => StepResponse::stay(
            format!(
                "When would you like the project finished? For example:\n{}",
                timeline_menu()
            ),
            ConversationStep::Timeline,
        ),
    }
}

fn respond_room_size(raw_text: &str) -> StepResponse {
    StepResponse::advance(
        "Noted! Now, who do we have the pleasure of working with? Please share your name."
            .to_string(),
        ConversationStep::ContactInfo,
    )
    .proposing(CollectedData {
        room_size: Some(raw_text.to_string()),
        ..Default::default()
    })
}

/// Two-phase contact collection: name first, then email. A conversation
/// that already has both (a prior partial pass) skips ahead.
fn respond_contact_info(
    intent: &Intent,
    raw_text: &str,
    context: &ConversationContext,
) -> StepResponse {
    let data = &context.collected_data;

    if intent.kind == "email" {
        let email = intent
            .extracted_value
            .clone()
            .unwrap_or_else(|| raw_text.to_string());
        let message = format!(
            "Got it, we'll follow up at {}. Before we wrap up, any special requests \
             or notes for the design team?",
            email
        );
        return StepResponse::advance(message, ConversationStep::AdditionalNotes).proposing(
            CollectedData {
                email: Some(email),
                ..Default::default()
            },
        );
    }

    if intent.kind == "phone" {
        let phone = intent
            .extracted_value
            .clone()
            .unwrap_or_else(|| raw_text.to_string());
        let missing = if data.name.is_none() {
            "your name"
        } else {
            "your email address"
        };
        let message = format!(
            "Thanks, we've noted that number. Could you also share {}?",
            missing
        );
        return StepResponse::stay(message, ConversationStep::ContactInfo).proposing(
            CollectedData {
                phone: Some(phone),
                ..Default::default()
            },
        );
    }

    if data.contact_complete() {
        return StepResponse::advance(
            "We already have your contact details. Any special requests or notes \
             for the design team?"
                .to_string(),
            ConversationStep::AdditionalNotes,
        );
    }

    if intent.kind == "name" && data.name.is_none() {
        return StepResponse::stay(
            "Lovely to meet you! What's the best email address to reach you at?".to_string(),
            ConversationStep::ContactInfo,
        )
        .proposing(CollectedData {
            name: Some(raw_text.to_string()),
            ..Default::default()
        });
    }

    let message = if data.name.is_some() {
        "Could you share an email address for the design team to reach you at?".to_string()
    } else {
        "Before we continue, could you share your name?".to_string()
    };
    StepResponse::stay(message, ConversationStep::ContactInfo)
}

fn respond_additional_notes(raw_text: &str, context: &ConversationContext) -> StepResponse {
    let message = summary_message(&context.collected_data);
    StepResponse {
        message,
        next_step: ConversationStep::Complete,
        is_complete: true,
        next_steps: Some(NEXT_STEPS.iter().map(|s| s.to_string()).collect()),
        proposed: CollectedData {
            additional_notes: Some(raw_text.to_string()),
            ..Default::default()
        },
    }
}

/// Defensive default for a finished conversation; not reachable via the
/// normal flow. The step stays terminal.
fn respond_complete() -> StepResponse {
    StepResponse::stay(
        format!(
            "Your consultation brief is already complete and our team will be in touch. \
             If you'd like to start a new brief, tell me whether the project is {}.",
            project_type_options()
        ),
        ConversationStep::Complete,
    )
}

fn summary_message(data: &CollectedData) -> String {
    let field = |value: Option<&str>| value.unwrap_or("not specified").to_string();
    format!(
        "Thank you! Here's a summary of your consultation request:\n\n\
         • Project: {}\n\
         • Room: {}\n\
         • Style: {}\n\
         • Budget: {}\n\
         • Timeline: {}\n\
         • Size: {}\n\n\
         Our design team will review your brief and reach out shortly.",
        field(data.project_type.as_deref()),
        field(data.room_type.as_deref()),
        field(data.design_style.as_deref()),
        field(data.budget_display().or(data.budget.as_deref())),
        field(data.timeline_display().or(data.timeline.as_deref())),
        field(data.room_size.as_deref()),
    )
}

fn project_type_options() -> &'static str {
    "residential, commercial, or a renovation"
}

fn style_menu() -> String {
    DESIGN_STYLES
        .iter()
        .map(|(key, description)| format!("• {}: {}", key, description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn style_names() -> String {
    DESIGN_STYLES
        .iter()
        .map(|(key, _)| *key)
        .collect::<Vec<_>>()
        .join(", ")
}

fn budget_menu() -> String {
    BUDGET_BANDS
        .iter()
        .map(|(_, label)| format!("• {}", label))
        .collect::<Vec<_>>()
        .join("\n")
}

fn timeline_menu() -> String {
    TIMELINE_BANDS
        .iter()
        .map(|(_, label)| format!("• {}", label))
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
