use super::{
    coordinate::Coordinate,
    distance_matrix::DistanceMatrix,
    kilometers::Kilometers,
    stop::{Stop, StopIdx},
};

/// A single-vehicle routing problem: visit every stop once, starting and
/// ending at the depot.
pub struct RoutingProblem {
    depot: Stop,
    stops: Vec<Stop>,
    vehicle_capacity: Option<f64>,
    distances: DistanceMatrix,
}

impl RoutingProblem {
    pub fn new(depot: Stop, stops: Vec<Stop>, vehicle_capacity: Option<f64>) -> Self {
        // The depot is stored after the stops in the matrix.
        let coordinates: Vec<Coordinate> = stops
            .iter()
            .chain(std::iter::once(&depot))
            .map(|stop| *stop.coordinate())
            .collect();

        RoutingProblem {
            distances: DistanceMatrix::from_haversine(&coordinates),
            depot,
            stops,
            vehicle_capacity,
        }
    }

    pub fn depot(&self) -> &Stop {
        &self.depot
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, index: StopIdx) -> &Stop {
        &self.stops[index]
    }

    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn stop_indices(&self) -> impl Iterator<Item = StopIdx> + '_ {
        (0..self.stops.len()).map(StopIdx::new)
    }

    /// Reserved for a capacity-constrained variant; no planner reads it.
    pub fn vehicle_capacity(&self) -> Option<f64> {
        self.vehicle_capacity
    }

    #[inline(always)]
    fn depot_position(&self) -> usize {
        self.stops.len()
    }

    #[inline(always)]
    pub fn distance(&self, from: StopIdx, to: StopIdx) -> Kilometers {
        self.distances.distance(from.get(), to.get())
    }

    #[inline(always)]
    pub fn distance_from_depot(&self, to: StopIdx) -> Kilometers {
        self.distances.distance(self.depot_position(), to.get())
    }

    #[inline(always)]
    pub fn distance_to_depot(&self, from: StopIdx) -> Kilometers {
        self.distances.distance(from.get(), self.depot_position())
    }
}
