//! PostgreSQL adapters.

mod conversation_store;
mod portfolio_repository;
mod team_repository;

pub use conversation_store::PostgresConversationStore;
pub use portfolio_repository::PostgresPortfolioRepository;
pub use team_repository::PostgresTeamRepository;
