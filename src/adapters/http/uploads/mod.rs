//! Uploads HTTP adapter.

mod handlers;
mod routes;

pub use handlers::UploadAppState;
pub use routes::upload_routes;
