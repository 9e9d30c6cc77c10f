use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    error::OptimizeError,
    json::types::{JsonOptimizeRouteRequest, JsonOptimizeRouteResponse},
};

use super::{
    evaluator::RouteEvaluator,
    planner::{PlanRoute, RoutePlanner},
    route_request::{OptimizedRoute, RouteRequest},
    solver_params::SolverParams,
};

pub const DEFAULT_MAX_LOCATIONS: usize = 1000;

/// Entry point of the optimizer: validates requests, runs the selected
/// planner and re-scores its answer.
#[derive(Clone, Debug)]
pub struct OptimizationService {
    params: SolverParams,
    max_locations: usize,
}

impl Default for OptimizationService {
    fn default() -> Self {
        OptimizationService::new(SolverParams::default())
    }
}

impl OptimizationService {
    pub fn new(params: SolverParams) -> Self {
        OptimizationService {
            params,
            max_locations: DEFAULT_MAX_LOCATIONS,
        }
    }

    pub fn with_max_locations(mut self, max_locations: usize) -> Self {
        self.max_locations = max_locations;
        self
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn max_locations(&self) -> usize {
        self.max_locations
    }

    /// Validates and optimizes a request in its wire format. Unknown
    /// algorithm names run nearest-neighbor.
    pub fn optimize(
        &self,
        input: &JsonOptimizeRouteRequest,
    ) -> Result<JsonOptimizeRouteResponse, OptimizeError> {
        let request = input.build_request(self.max_locations)?;
        let route = self.solve(&request)?;

        Ok(JsonOptimizeRouteResponse::from_route(&route))
    }

    /// Runs the request with a generator seeded from the request, the
    /// service, or fresh entropy, in that order.
    pub fn solve(&self, request: &RouteRequest) -> Result<OptimizedRoute, OptimizeError> {
        let seed = request
            .overrides
            .seed
            .or(self.params.seed)
            .unwrap_or_else(rand::random);
        debug!(seed, "seeding planner");

        self.solve_with_rng(request, &mut SmallRng::seed_from_u64(seed))
    }

    #[instrument(
        skip_all,
        fields(algorithm = %request.algorithm, stops = request.problem.num_stops())
    )]
    pub fn solve_with_rng(
        &self,
        request: &RouteRequest,
        rng: &mut impl Rng,
    ) -> Result<OptimizedRoute, OptimizeError> {
        let params = self.params.with_overrides(&request.overrides);
        params.validate()?;

        let problem = &request.problem;
        let planner = RoutePlanner::new(request.algorithm, &params);
        let sequence = planner.plan(problem, rng).to_indices();

        // The planner's own bookkeeping is not trusted.
        let evaluation = RouteEvaluator::new(problem).evaluate(&sequence)?;

        debug!(
            distance = evaluation.total_distance.value(),
            "route optimized"
        );

        Ok(OptimizedRoute {
            sequence,
            evaluation,
            algorithm: request.algorithm,
        })
    }
}
