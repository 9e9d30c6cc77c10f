use std::{path::PathBuf, time::Instant};

use clap::Args;
use comfy_table::Table;
use courier_optimizer::{
    error::OptimizeError,
    json::types::JsonOptimizedRoute,
    solver::{
        optimization_service::OptimizationService,
        planner::Algorithm,
        route_request::OptimizedRoute,
        solver_params::SolverParams,
    },
};
use rayon::prelude::*;
use tracing::info;

use crate::file_utils::read_request;

#[derive(Args)]
pub struct CompareArgs {
    /// Request file in the same JSON format as the HTTP endpoint
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long)]
    seed: Option<u64>,
}

struct Comparison {
    route: OptimizedRoute,
    elapsed_ms: u128,
}

pub fn run(args: CompareArgs) -> Result<(), anyhow::Error> {
    let input = read_request(&args.input)?;
    let service = OptimizationService::new(SolverParams {
        seed: args.seed,
        ..SolverParams::default()
    });

    info!("Comparing algorithms on {:?}", args.input);

    let comparisons = Algorithm::ALL
        .par_iter()
        .map(|&algorithm| {
            let mut request = input.build_request(service.max_locations())?;
            request.algorithm = algorithm;

            let start = Instant::now();
            let route = service.solve(&request)?;

            Ok(Comparison {
                route,
                elapsed_ms: start.elapsed().as_millis(),
            })
        })
        .collect::<Result<Vec<_>, OptimizeError>>()?;

    println!("{}", comparison_table(&comparisons));

    Ok(())
}

fn comparison_table(comparisons: &[Comparison]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Algorithm",
        "Distance (km)",
        "Time (min)",
        "Fuel",
        "Elapsed (ms)",
        "Sequence",
    ]);

    for comparison in comparisons {
        let route = JsonOptimizedRoute::from_route(&comparison.route);
        table.add_row(vec![
            comparison.route.algorithm.to_string(),
            format!("{:.2}", route.total_distance),
            route.estimated_time.to_string(),
            format!("{:.2}", route.fuel_cost),
            comparison.elapsed_ms.to_string(),
            format!("{:?}", route.sequence),
        ]);
    }

    table
}
