use super::{coordinate::Coordinate, kilometers::Kilometers};

/// Flat matrix of haversine distances between every pair of coordinates.
/// The entry for a pair is found at `from * num_locations + to`.
pub struct DistanceMatrix {
    distances: Vec<Kilometers>,
    num_locations: usize,
}

impl DistanceMatrix {
    pub fn from_haversine(coordinates: &[Coordinate]) -> Self {
        let num_locations = coordinates.len();
        let mut distances = vec![Kilometers::ZERO; num_locations * num_locations];

        for (i, from) in coordinates.iter().enumerate() {
            for (j, to) in coordinates.iter().enumerate() {
                distances[i * num_locations + j] = from.haversine_distance(to);
            }
        }

        DistanceMatrix {
            distances,
            num_locations,
        }
    }

    #[inline(always)]
    pub fn distance(&self, from: usize, to: usize) -> Kilometers {
        self.distances[from * self.num_locations + to]
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }
}
