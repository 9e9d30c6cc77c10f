use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    optimize_route::optimize_route_handler,
    ready::{not_found_handler, ready_handler},
    state::AppState,
};

pub fn app_router(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(ready_handler))
        .route("/optimize-route", post(optimize_route_handler))
        .fallback(not_found_handler)
        .layer(cors_layer)
        .with_state(state)
}
