//! Portfolio HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::PortfolioAppState;
pub use routes::portfolio_routes;
