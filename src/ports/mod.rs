//! Ports - interfaces the domain and application layers depend on.
//!
//! Adapters implement these traits; handlers hold them as `Arc<dyn …>`.

mod completion_notifier;
mod conversation_store;
mod image_storage;
mod portfolio_repository;
mod rate_limiter;
mod team_repository;

pub use completion_notifier::{CompletionNotifier, ConsultationComplete, NoopCompletionNotifier};
pub use conversation_store::{ChatRecord, ConversationStore, RecordKind, TransportMetadata};
pub use image_storage::{ImageStorage, StorageError, StoredImage};
pub use portfolio_repository::{PortfolioRepository, ProjectFilter};
pub use rate_limiter::RateLimiter;
pub use team_repository::TeamRepository;
