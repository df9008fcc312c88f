//! Axum routes for the stats endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_stats, StatsAppState};

/// Creates routes for stats endpoints.
///
/// REST Endpoints:
/// - GET /api/stats - Aggregate counts
pub fn stats_routes() -> Router<StatsAppState> {
    Router::new().route("/stats", get(get_stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_routes_creates_valid_router() {
        let _routes = stats_routes();
    }
}
