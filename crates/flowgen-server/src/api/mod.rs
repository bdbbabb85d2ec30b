pub mod codegen;
pub mod error;
pub mod languages;

pub use error::ApiError;

use axum::{
    Router,
    routing::{get, post},
};

/// Build the code generation routes
pub fn router() -> Router {
    Router::new()
        .route("/generate-code", post(codegen::generate_code))
        .route("/generate-payload", post(codegen::generate_payload))
        .route("/languages", get(languages::list_languages))
}
