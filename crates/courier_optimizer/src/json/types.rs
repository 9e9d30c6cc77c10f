use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{
    error::OptimizeError,
    problem::{
        coordinate::Coordinate, priority::Priority, routing_problem::RoutingProblem, stop::Stop,
    },
    solver::{
        planner::Algorithm,
        route_request::{OptimizedRoute, RouteRequest},
        solver_params::SolverOverrides,
    },
    utils::round::round_to,
};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename = "OptimizeRouteRequest", rename_all = "camelCase")]
pub struct JsonOptimizeRouteRequest {
    pub locations: Option<Vec<JsonStop>>,
    /// Accepted and carried, not enforced by any planner yet.
    pub vehicle_capacity: Option<f64>,
    pub start_location: Option<JsonStop>,
    /// `nearest-neighbor`, `genetic` or `simulated-annealing`. Anything else
    /// runs `nearest-neighbor`.
    pub algorithm: Option<String>,
    pub options: Option<JsonSolverOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Stop")]
pub struct JsonStop {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: String,
    /// Positive integer, defaults to 1.
    pub priority: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename = "SolverOptions", rename_all = "camelCase")]
pub struct JsonSolverOptions {
    pub seed: Option<u64>,
    pub population_size: Option<usize>,
    pub generations: Option<usize>,
    pub elite_size: Option<usize>,
    pub mutation_rate: Option<f64>,
    pub initial_temperature: Option<f64>,
    pub cooling_rate: Option<f64>,
    pub iterations_per_temperature: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "OptimizedRoute", rename_all = "camelCase")]
pub struct JsonOptimizedRoute {
    pub sequence: Vec<usize>,
    /// Kilometres, two decimals.
    pub total_distance: f64,
    /// Whole minutes.
    pub estimated_time: u64,
    /// Currency units, two decimals.
    pub fuel_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "OptimizeRouteResponse", rename_all = "camelCase")]
pub struct JsonOptimizeRouteResponse {
    pub success: bool,
    pub optimized_route: JsonOptimizedRoute,
    pub algorithm: String,
    pub generated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "ErrorResponse")]
pub struct JsonErrorResponse {
    pub success: bool,
    pub error: String,
}

impl JsonErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        JsonErrorResponse {
            success: false,
            error: error.into(),
        }
    }
}

impl JsonStop {
    fn build_stop(&self, field: &str) -> Result<Stop, OptimizeError> {
        let with_field =
            |error: OptimizeError| OptimizeError::validation(format!("{field}: {error}"));

        let coordinate = Coordinate::try_new(self.lat, self.lng).map_err(with_field)?;
        let priority = self
            .priority
            .map(Priority::try_from_number)
            .transpose()
            .map_err(with_field)?
            .unwrap_or_default();

        Ok(Stop::new(coordinate, self.address.clone(), priority))
    }
}

impl From<&JsonSolverOptions> for SolverOverrides {
    fn from(options: &JsonSolverOptions) -> Self {
        SolverOverrides {
            seed: options.seed,
            population_size: options.population_size,
            generations: options.generations,
            elite_size: options.elite_size,
            mutation_rate: options.mutation_rate,
            initial_temperature: options.initial_temperature,
            cooling_rate: options.cooling_rate,
            iterations_per_temperature: options.iterations_per_temperature,
        }
    }
}

impl JsonOptimizeRouteRequest {
    fn algorithm(&self) -> Algorithm {
        match self.algorithm.as_deref() {
            None => Algorithm::default(),
            Some(name) => name.parse().unwrap_or_else(|error| {
                warn!(%error, "falling back to {}", Algorithm::default());
                Algorithm::default()
            }),
        }
    }

    #[instrument(skip_all, level = "debug")]
    pub fn build_request(&self, max_locations: usize) -> Result<RouteRequest, OptimizeError> {
        let locations = match self.locations.as_deref() {
            Some(locations) if !locations.is_empty() => locations,
            _ => {
                return Err(OptimizeError::validation(
                    "locations must be a non-empty list",
                ));
            }
        };

        if locations.len() > max_locations {
            return Err(OptimizeError::validation(format!(
                "at most {max_locations} locations are supported, got {}",
                locations.len()
            )));
        }

        let depot = self
            .start_location
            .as_ref()
            .ok_or_else(|| OptimizeError::validation("startLocation is required"))?
            .build_stop("startLocation")?;

        let stops = locations
            .iter()
            .enumerate()
            .map(|(index, stop)| stop.build_stop(&format!("locations[{index}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteRequest {
            problem: RoutingProblem::new(depot, stops, self.vehicle_capacity),
            algorithm: self.algorithm(),
            overrides: self
                .options
                .as_ref()
                .map(SolverOverrides::from)
                .unwrap_or_default(),
        })
    }
}

impl JsonOptimizedRoute {
    pub fn from_route(route: &OptimizedRoute) -> Self {
        let evaluation = &route.evaluation;
        JsonOptimizedRoute {
            sequence: route.sequence.clone(),
            total_distance: round_to(evaluation.total_distance.value(), 2),
            estimated_time: evaluation.estimated_time_minutes.round() as u64,
            fuel_cost: round_to(evaluation.fuel_cost, 2),
        }
    }
}

impl JsonOptimizeRouteResponse {
    pub fn from_route(route: &OptimizedRoute) -> Self {
        JsonOptimizeRouteResponse {
            success: true,
            optimized_route: JsonOptimizedRoute::from_route(route),
            algorithm: route.algorithm.to_string(),
            generated_at: Timestamp::now(),
        }
    }
}
