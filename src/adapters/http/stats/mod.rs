//! Stats HTTP adapter.

mod handlers;
mod routes;

pub use handlers::StatsAppState;
pub use routes::stats_routes;
