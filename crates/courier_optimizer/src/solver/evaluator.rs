use jiff::SignedDuration;

use crate::problem::{kilometers::Kilometers, kmh::Kmh, routing_problem::RoutingProblem};

use super::tour::{InvalidSequenceError, Tour};

/// Assumed constant average vehicle speed.
pub const AVERAGE_SPEED: Kmh = Kmh::new(50.0);

/// Currency units spent per kilometre driven.
pub const FUEL_COST_PER_KM: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEvaluation {
    pub total_distance: Kilometers,
    pub estimated_time_minutes: f64,
    pub fuel_cost: f64,
}

impl RouteEvaluation {
    pub fn from_distance(total_distance: Kilometers) -> Self {
        RouteEvaluation {
            total_distance,
            estimated_time_minutes: total_distance.minutes_at(AVERAGE_SPEED),
            fuel_cost: total_distance * FUEL_COST_PER_KM,
        }
    }

    pub fn travel_duration(&self) -> SignedDuration {
        self.total_distance / AVERAGE_SPEED
    }
}

/// Scores closed tours: depot, every stop in order, back to the depot.
pub struct RouteEvaluator<'a> {
    problem: &'a RoutingProblem,
}

impl<'a> RouteEvaluator<'a> {
    pub fn new(problem: &'a RoutingProblem) -> Self {
        RouteEvaluator { problem }
    }

    /// Validates `sequence` against the problem, then scores it.
    pub fn evaluate(&self, sequence: &[usize]) -> Result<RouteEvaluation, InvalidSequenceError> {
        let tour = Tour::try_new(sequence, self.problem.num_stops())?;
        Ok(self.evaluate_tour(&tour))
    }

    pub fn evaluate_tour(&self, tour: &Tour) -> RouteEvaluation {
        RouteEvaluation::from_distance(self.distance(tour))
    }

    /// Closed-tour length of an already valid tour.
    pub fn distance(&self, tour: &Tour) -> Kilometers {
        debug_assert_eq!(tour.len(), self.problem.num_stops());

        let (Some(first), Some(last)) = (tour.first(), tour.last()) else {
            return Kilometers::ZERO;
        };

        let mut total = self.problem.distance_from_depot(first);
        for pair in tour.stops().windows(2) {
            total += self.problem.distance(pair[0], pair[1]);
        }
        total += self.problem.distance_to_depot(last);

        total
    }
}
