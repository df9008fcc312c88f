//! Lexical intent matcher.
//!
//! Classifies one inbound message into a step-scoped intent with a fixed
//! confidence. Pure function of (text, step): lower-case the input, apply
//! the step's ordered substring/regex rules, first match wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::catalog::{BUDGET_BANDS, DESIGN_STYLES, ROOM_TYPES, TIMELINE_BANDS};
use super::step::ConversationStep;

/// Intents at or below this confidence are never committed into
/// collected data (the orchestrator owns the gate).
pub const COMMIT_CONFIDENCE_THRESHOLD: f64 = 0.6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email pattern")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d[\d\s().-]{6,}\d").expect("valid phone pattern")
});

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d[\d,]*").expect("valid amount pattern")
});

/// The classified meaning of one inbound message, scoped to the step
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Step-scoped intent kind (e.g. "modern" only at the design_style step).
    pub kind: String,
    /// Fixed confidence in [0, 1] assigned by the matching rule.
    pub confidence: f64,
    /// Value pulled out of the text by extraction rules (email, phone).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_value: Option<String>,
}

impl Intent {
    fn new(kind: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind: kind.into(),
            confidence,
            extracted_value: None,
        }
    }

    fn with_value(kind: impl Into<String>, confidence: f64, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            confidence,
            extracted_value: Some(value.into()),
        }
    }

    /// The no-rule-matched fallback.
    pub fn unknown() -> Self {
        Self::new("unknown", 0.3)
    }

    /// Returns true if no matching rule fired.
    pub fn is_unknown(&self) -> bool {
        self.kind == "unknown"
    }

    /// Returns true if this intent clears the commit gate.
    pub fn clears_gate(&self) -> bool {
        self.confidence > COMMIT_CONFIDENCE_THRESHOLD
    }
}

/// Classifies `raw_text` against the rules for `current_step`.
pub fn match_intent(raw_text: &str, current_step: ConversationStep) -> Intent {
    let text = raw_text.to_lowercase();

    match current_step {
        ConversationStep::Greeting => match_greeting(&text),
        ConversationStep::ProjectType => match_project_type(&text),
        ConversationStep::RoomType => match_room_type(&text),
        ConversationStep::DesignStyle => match_design_style(&text),
        ConversationStep::Budget => match_budget(&text),
        ConversationStep::Timeline => match_timeline(&text),
        ConversationStep::ContactInfo => match_contact_info(&text),
        // Free-text and terminal steps carry no matching rules.
        ConversationStep::RoomSize
        | ConversationStep::AdditionalNotes
        | ConversationStep::Complete => Intent::unknown(),
    }
}

fn match_greeting(text: &str) -> Intent {
    if contains_any(text, &["hello", "hi", "hey"]) {
        Intent::new("greeting", 0.9)
    } else {
        Intent::unknown()
    }
}

fn match_project_type(text: &str) -> Intent {
    if contains_any(text, &["residential", "home", "house"]) {
        Intent::new("residential", 0.8)
    } else if contains_any(text, &["commercial", "office", "business"]) {
        Intent::new("commercial", 0.8)
    } else if contains_any(text, &["renovation", "remodel"]) {
        Intent::new("renovation", 0.7)
    } else {
        Intent::unknown()
    }
}

fn match_room_type(text: &str) -> Intent {
    for room in ROOM_TYPES {
        if text.contains(room) {
            return Intent::new(*room, 0.8);
        }
    }
    Intent::unknown()
}

fn match_design_style(text: &str) -> Intent {
    for (key, _) in DESIGN_STYLES {
        if contains_key(text, key) {
            return Intent::new(*key, 0.8);
        }
    }
    Intent::unknown()
}

fn match_budget(text: &str) -> Intent {
    for (key, label) in BUDGET_BANDS {
        if contains_key(text, key) || text.contains(&label.to_lowercase()) {
            return Intent::new(*key, 0.8);
        }
    }
    if let Some(amount) = first_amount(text) {
        return Intent::new(bucket_amount(amount), 0.7);
    }
    Intent::unknown()
}

fn match_timeline(text: &str) -> Intent {
    for (key, label) in TIMELINE_BANDS {
        if contains_key(text, key) || text.contains(&label.to_lowercase()) {
            return Intent::new(*key, 0.8);
        }
    }
    Intent::unknown()
}

/// Contact matching runs extraction rules first; anything that is neither
/// an email nor a phone number is treated as the visitor's name, so the
/// name sub-phase accepts a bare "John" as readily as "my name is John".
fn match_contact_info(text: &str) -> Intent {
    if let Some(m) = EMAIL_RE.find(text) {
        return Intent::with_value("email", 0.9, m.as_str());
    }
    if let Some(m) = PHONE_RE.find(text) {
        return Intent::with_value("phone", 0.9, m.as_str().trim());
    }
    Intent::new("name", 0.7)
}

/// Returns true if `text` contains `key`, with hyphens in the key also
/// accepted as spaces ("mid century" matches "mid-century").
fn contains_key(text: &str, key: &str) -> bool {
    if text.contains(key) {
        return true;
    }
    key.contains('-') && text.contains(&key.replace('-', " "))
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Extracts the first integer in the text, ignoring thousands separators.
fn first_amount(text: &str) -> Option<u64> {
    AMOUNT_RE
        .find(text)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

/// Buckets a dollar amount into a budget band key.
///
/// Boundaries land in the upper band: 10_000 maps to "10k-25k".
pub(crate) fn bucket_amount(amount: u64) -> &'static str {
    if amount < 10_000 {
        "under-10k"
    } else if amount < 25_000 {
        "10k-25k"
    } else if amount < 50_000 {
        "25k-50k"
    } else if amount < 100_000 {
        "50k-100k"
    } else {
        "over-100k"
    }
}
