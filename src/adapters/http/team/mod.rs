//! Team HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::TeamAppState;
pub use routes::team_routes;
