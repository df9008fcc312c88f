//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod chat;
pub mod error;
pub mod portfolio;
pub mod stats;
pub mod team;
pub mod uploads;

// Re-export key types for convenience
pub use chat::{chat_routes, ChatAppState};
pub use error::{ApiError, ErrorResponse};
pub use portfolio::{portfolio_routes, PortfolioAppState};
pub use stats::{stats_routes, StatsAppState};
pub use team::{team_routes, TeamAppState};
pub use uploads::{upload_routes, UploadAppState};
