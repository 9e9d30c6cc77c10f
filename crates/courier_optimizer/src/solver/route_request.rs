use crate::problem::routing_problem::RoutingProblem;

use super::{evaluator::RouteEvaluation, planner::Algorithm, solver_params::SolverOverrides};

/// A validated optimization request.
pub struct RouteRequest {
    pub problem: RoutingProblem,
    pub algorithm: Algorithm,
    pub overrides: SolverOverrides,
}

impl RouteRequest {
    pub fn new(problem: RoutingProblem, algorithm: Algorithm) -> Self {
        RouteRequest {
            problem,
            algorithm,
            overrides: SolverOverrides::default(),
        }
    }
}

/// Planner output, re-scored by the evaluator. Values are not rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedRoute {
    pub sequence: Vec<usize>,
    pub evaluation: RouteEvaluation,
    pub algorithm: Algorithm,
}
