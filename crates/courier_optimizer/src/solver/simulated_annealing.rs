use rand::Rng;
use tracing::{debug, instrument};

use crate::problem::routing_problem::RoutingProblem;

use super::{
    evaluator::RouteEvaluator, planner::PlanRoute, solver_params::AnnealingParams, tour::Tour,
};

/// Metropolis criterion: improvements are always taken, a worsening move of
/// `delta` is taken with probability `exp(-delta / temperature)`.
pub fn metropolis_accept(delta: f64, temperature: f64, rng: &mut impl Rng) -> bool {
    if delta < 0.0 {
        return true;
    }

    rng.random::<f64>() < (-delta / temperature).exp()
}

/// Single-trajectory local search over random swaps with a geometric cooling
/// schedule. The best tour seen is tracked apart from the wandering current
/// tour and is what gets returned.
pub struct SimulatedAnnealingPlanner {
    params: AnnealingParams,
}

impl SimulatedAnnealingPlanner {
    pub fn new(params: AnnealingParams) -> Self {
        SimulatedAnnealingPlanner { params }
    }

    pub fn params(&self) -> &AnnealingParams {
        &self.params
    }

    /// The shuffle the search starts from. Drawn before any other use of
    /// `rng`.
    pub fn initial_tour(&self, num_stops: usize, rng: &mut impl Rng) -> Tour {
        Tour::random(num_stops, rng)
    }

    /// Number of temperature levels before the schedule reaches `T <= 1`.
    pub fn temperature_levels(&self) -> usize {
        let mut temperature = self.params.initial_temperature;
        let mut levels = 0;
        while temperature > 1.0 {
            temperature *= 1.0 - self.params.cooling_rate;
            levels += 1;
        }
        levels
    }
}

impl PlanRoute for SimulatedAnnealingPlanner {
    #[instrument(skip_all, level = "debug", fields(stops = problem.num_stops()))]
    fn plan(&self, problem: &RoutingProblem, rng: &mut impl Rng) -> Tour {
        let num_stops = problem.num_stops();
        if num_stops <= 1 {
            return Tour::identity(num_stops);
        }

        let evaluator = RouteEvaluator::new(problem);

        let mut current = self.initial_tour(num_stops, rng);
        let mut current_distance = evaluator.distance(&current);
        let mut best = current.clone();
        let mut best_distance = current_distance;
        let mut temperature = self.params.initial_temperature;

        while temperature > 1.0 {
            for _ in 0..self.params.iterations_per_temperature {
                let Some((a, b)) = current.swap_random(rng) else {
                    break;
                };

                let neighbor_distance = evaluator.distance(&current);
                let delta = (neighbor_distance - current_distance).value();

                if metropolis_accept(delta, temperature, rng) {
                    current_distance = neighbor_distance;
                    if current_distance < best_distance {
                        best.clone_from(&current);
                        best_distance = current_distance;
                    }
                } else {
                    current.swap(a, b);
                }
            }

            temperature *= 1.0 - self.params.cooling_rate;
        }

        debug!(distance = best_distance.value(), "annealing done");

        best
    }
}
