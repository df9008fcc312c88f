//! Application layer - orchestration between transports and the domain.

mod chat;

pub use chat::{ChatOutcome, ChatService};
