use crate::{api, config::ServerConfig, middleware};
use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub fn build_router(config: &ServerConfig) -> Router {
    let cors = middleware::cors::build_cors_layer(config);

    Router::new()
        .route("/health", get(health))
        .merge(api::router())
        .layer(cors)
}
