use rand::Rng;

use crate::problem::{kilometers::Kilometers, routing_problem::RoutingProblem, stop::StopIdx};

use super::{planner::PlanRoute, tour::Tour};

/// Greedy construction: from the current position, always drive to the
/// unvisited stop with the smallest `distance / priority`. Ties go to the
/// lowest stop index, so the result is fully deterministic.
pub struct NearestNeighborPlanner;

impl NearestNeighborPlanner {
    fn next_stop(
        problem: &RoutingProblem,
        current: Option<StopIdx>,
        visited: &[bool],
    ) -> Option<StopIdx> {
        let mut best: Option<(StopIdx, Kilometers)> = None;

        for candidate in problem.stop_indices().filter(|stop| !visited[stop.get()]) {
            let distance = match current {
                Some(current) => problem.distance(current, candidate),
                None => problem.distance_from_depot(candidate),
            };
            let adjusted = distance / problem.stop(candidate).priority().weight();

            // Strict comparison keeps the lowest index on ties.
            if best.is_none_or(|(_, best_adjusted)| adjusted < best_adjusted) {
                best = Some((candidate, adjusted));
            }
        }

        best.map(|(stop, _)| stop)
    }
}

impl PlanRoute for NearestNeighborPlanner {
    fn plan(&self, problem: &RoutingProblem, _: &mut impl Rng) -> Tour {
        let mut visited = vec![false; problem.num_stops()];
        let mut visits = Vec::with_capacity(problem.num_stops());
        let mut current = None;

        while let Some(next) = Self::next_stop(problem, current, &visited) {
            visited[next.get()] = true;
            visits.push(next);
            current = Some(next);
        }

        Tour::from_visits(visits)
    }
}
