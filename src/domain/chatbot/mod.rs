//! Chatbot domain module.
//!
//! The consultation questionnaire core: step sequence, lexical intent
//! matching, response generation, and the accumulated answers. Everything
//! here is pure; persistence and transports live in the adapters.

pub mod catalog;
mod collected;
mod intent;
mod responder;
mod step;

pub use collected::{CollectedData, ConversationContext};
pub use intent::{match_intent, Intent, COMMIT_CONFIDENCE_THRESHOLD};
pub use responder::{generate, StepResponse, NEXT_STEPS};
pub use step::ConversationStep;
