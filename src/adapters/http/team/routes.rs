//! Axum routes for team endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_member, delete_member, get_member, list_members, update_member, TeamAppState,
};

/// Creates routes for team endpoints.
///
/// REST Endpoints:
/// - GET /api/team - List team members
/// - POST /api/team - Create a team member
/// - GET /api/team/{id} - Get one team member
/// - PUT /api/team/{id} - Update a team member
/// - DELETE /api/team/{id} - Delete a team member
pub fn team_routes() -> Router<TeamAppState> {
    Router::new()
        .route("/team", get(list_members).post(create_member))
        .route(
            "/team/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
}
