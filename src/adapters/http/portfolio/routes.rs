//! Axum routes for portfolio endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_project, delete_project, get_project, list_projects, update_project, PortfolioAppState,
};

/// Creates routes for portfolio endpoints.
///
/// REST Endpoints:
/// - GET /api/portfolio - List projects (supports ?style= and ?featured=)
/// - POST /api/portfolio - Create a project
/// - GET /api/portfolio/{id} - Get one project
/// - PUT /api/portfolio/{id} - Update a project
/// - DELETE /api/portfolio/{id} - Delete a project
pub fn portfolio_routes() -> Router<PortfolioAppState> {
    Router::new()
        .route("/portfolio", get(list_projects).post(create_project))
        .route(
            "/portfolio/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_routes_creates_valid_router() {
        let _routes = portfolio_routes();
    }
}
