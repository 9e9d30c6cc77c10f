use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use courier_optimizer::json::types::{JsonOptimizeRouteRequest, JsonOptimizeRouteResponse};
use tracing::info;

use crate::{error::ApiError, state::AppState};

pub async fn optimize_route_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<JsonOptimizeRouteRequest>, JsonRejection>,
) -> Result<Json<JsonOptimizeRouteResponse>, ApiError> {
    let Json(request) = body?;

    // Planners are CPU bound and never yield.
    let response =
        tokio::task::spawn_blocking(move || state.service.optimize(&request)).await??;

    info!(
        algorithm = %response.algorithm,
        stops = response.optimized_route.sequence.len(),
        total_distance = response.optimized_route.total_distance,
        "route optimized"
    );

    Ok(Json(response))
}
