use std::path::PathBuf;

use clap::Args;
use courier_optimizer::solver::{
    optimization_service::OptimizationService, planner::Algorithm, solver_params::SolverParams,
};
use tracing::info;

use crate::file_utils::read_request;

#[derive(Args)]
pub struct OptimizeArgs {
    /// Request file in the same JSON format as the HTTP endpoint
    #[arg(short, long)]
    input: PathBuf,

    /// Overrides the algorithm named in the request file
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    #[arg(short, long)]
    seed: Option<u64>,
}

pub fn run(args: OptimizeArgs) -> Result<(), anyhow::Error> {
    let mut input = read_request(&args.input)?;
    if let Some(algorithm) = args.algorithm {
        input.algorithm = Some(algorithm.to_string());
    }

    let service = OptimizationService::new(SolverParams {
        seed: args.seed,
        ..SolverParams::default()
    });
    let response = service.optimize(&input)?;

    info!(
        algorithm = %response.algorithm,
        total_distance = response.optimized_route.total_distance,
        "optimized {:?}",
        args.input
    );
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
