mod app;
mod config;
mod error;
mod optimize_route;
mod ready;
mod state;

use std::sync::Arc;

use axum::serve;
use courier_optimizer::solver::{
    optimization_service::OptimizationService, solver_params::SolverParams,
};
use tracing::info;

use mimalloc::MiMalloc;

use crate::{app::app_router, config::ApiConfig, state::AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    let config = ApiConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let service = OptimizationService::new(SolverParams {
        seed: config.seed,
        ..SolverParams::default()
    })
    .with_max_locations(config.max_locations);

    let state = Arc::new(AppState { service });
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!(address = %config.bind_address, "courier api listening");

    serve(listener, app).await?;

    Ok(())
}
