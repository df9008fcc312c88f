//! Axum routes for upload endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{upload_image, UploadAppState};

/// Creates routes for upload endpoints.
///
/// REST Endpoints:
/// - POST /api/uploads - Store an uploaded image
pub fn upload_routes() -> Router<UploadAppState> {
    Router::new().route("/uploads", post(upload_image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_routes_creates_valid_router() {
        let _routes = upload_routes();
    }
}
