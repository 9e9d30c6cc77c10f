use rand::Rng;
use tracing::{debug, instrument};

use crate::problem::routing_problem::RoutingProblem;

use super::{
    evaluator::RouteEvaluator,
    planner::PlanRoute,
    population::Population,
    solver_params::GeneticParams,
    tour::Tour,
};

/// Evolves a population of tours with elitism, order crossover and swap
/// mutation. The best tour never gets worse from one generation to the next
/// because the elites are carried over unchanged.
pub struct GeneticPlanner {
    params: GeneticParams,
}

impl GeneticPlanner {
    pub fn new(params: GeneticParams) -> Self {
        GeneticPlanner { params }
    }

    pub fn params(&self) -> &GeneticParams {
        &self.params
    }

    /// The random tours the first generation starts from. Drawn before any
    /// other use of `rng`.
    pub fn initial_population(&self, num_stops: usize, rng: &mut impl Rng) -> Vec<Tour> {
        (0..self.params.population_size)
            .map(|_| Tour::random(num_stops, rng))
            .collect()
    }

    fn next_generation(&self, population: &Population, rng: &mut impl Rng) -> Vec<Tour> {
        let population_size = self.params.population_size;
        let parent_pool = 2 * self.params.elite_size;

        let mut next: Vec<Tour> = Vec::with_capacity(population_size);
        next.extend(
            population
                .elites(self.params.elite_size)
                .map(|elite| elite.tour.clone()),
        );

        while next.len() < population_size {
            let (Some(first), Some(second)) = (
                population.select_parent(parent_pool, rng),
                population.select_parent(parent_pool, rng),
            ) else {
                break;
            };

            let mut child = Tour::random_order_crossover(&first.tour, &second.tour, rng);
            if rng.random_bool(self.params.mutation_rate) {
                child.swap_random(rng);
            }

            next.push(child);
        }

        next
    }
}

impl PlanRoute for GeneticPlanner {
    #[instrument(skip_all, level = "debug", fields(stops = problem.num_stops()))]
    fn plan(&self, problem: &RoutingProblem, rng: &mut impl Rng) -> Tour {
        let num_stops = problem.num_stops();
        if num_stops <= 1 {
            return Tour::identity(num_stops);
        }

        let evaluator = RouteEvaluator::new(problem);
        let mut population =
            Population::evaluate(self.initial_population(num_stops, rng), &evaluator);

        for generation in 0..self.params.generations {
            let tours = self.next_generation(&population, rng);
            population = Population::evaluate(tours, &evaluator);

            if let Some(best) = population.best() {
                debug!(generation, distance = best.distance.value(), "generation done");
            }
        }

        population
            .into_best()
            .map(|best| best.tour)
            .unwrap_or_else(|| Tour::identity(num_stops))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::{
        problem::kilometers::Kilometers,
        test_utils::{self, RIYADH_DEPOT},
    };

    use super::*;

    #[test]
    fn test_never_worse_than_initial_population() {
        let problem = test_utils::grid_problem(4, 4);
        let evaluator = RouteEvaluator::new(&problem);
        let planner = GeneticPlanner::new(GeneticParams::default());

        for seed in 0..5 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let initial_best = planner
                .initial_population(problem.num_stops(), &mut rng.clone())
                .iter()
                .map(|tour| evaluator.distance(tour))
                .min()
                .unwrap();

            let tour = planner.plan(&problem, &mut rng);

            assert!(evaluator.distance(&tour) <= initial_best);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = test_utils::grid_problem(3, 4);
        let planner = GeneticPlanner::new(GeneticParams::default());

        let first = planner.plan(&problem, &mut SmallRng::seed_from_u64(99));
        let second = planner.plan(&problem, &mut SmallRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn test_beats_nearest_neighbor_on_small_instance() {
        // Only 24 orders exist; the greedy one is far from the best.
        let problem = test_utils::riyadh_problem();
        let evaluator = RouteEvaluator::new(&problem);
        let planner = GeneticPlanner::new(GeneticParams::default());

        let tour = planner.plan(&problem, &mut SmallRng::seed_from_u64(5));
        let nearest = evaluator.evaluate(&[0, 1, 3, 2]).unwrap().total_distance;

        assert!(evaluator.distance(&tour) <= nearest);
    }

    #[test]
    fn test_small_population_with_large_elite() {
        let problem = test_utils::grid_problem(2, 3);
        let planner = GeneticPlanner::new(GeneticParams {
            population_size: 3,
            generations: 10,
            elite_size: 3,
            mutation_rate: 1.0,
        });

        let tour = planner.plan(&problem, &mut SmallRng::seed_from_u64(1));
        assert!(
            RouteEvaluator::new(&problem)
                .evaluate(&tour.to_indices())
                .is_ok()
        );
    }

    #[test]
    fn test_degenerate_inputs_skip_evolution() {
        let planner = GeneticPlanner::new(GeneticParams::default());
        let mut rng = SmallRng::seed_from_u64(0);

        let empty = test_utils::create_problem(RIYADH_DEPOT, &[]);
        assert!(planner.plan(&empty, &mut rng).is_empty());

        let single = test_utils::create_problem(RIYADH_DEPOT, &[(24.7246, 46.6891, 1)]);
        let tour = planner.plan(&single, &mut rng);
        assert_eq!(tour.to_indices(), vec![0]);
        assert!(RouteEvaluator::new(&single).distance(&tour) > Kilometers::ZERO);
    }
}
