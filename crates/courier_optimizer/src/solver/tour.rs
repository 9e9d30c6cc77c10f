use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

use crate::problem::stop::StopIdx;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSequenceError {
    #[error("expected {expected} stops in the sequence, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("stop index {index} is out of range for {len} stops")]
    OutOfRange { index: usize, len: usize },

    #[error("stop index {index} appears more than once")]
    Duplicate { index: usize },
}

/// Checks that `sequence` is a permutation of `0..num_stops`.
pub fn validate_sequence(sequence: &[usize], num_stops: usize) -> Result<(), InvalidSequenceError> {
    if sequence.len() != num_stops {
        return Err(InvalidSequenceError::WrongLength {
            expected: num_stops,
            actual: sequence.len(),
        });
    }

    let mut seen = vec![false; num_stops];
    for &index in sequence {
        if index >= num_stops {
            return Err(InvalidSequenceError::OutOfRange {
                index,
                len: num_stops,
            });
        }

        if seen[index] {
            return Err(InvalidSequenceError::Duplicate { index });
        }
        seen[index] = true;
    }

    Ok(())
}

/// A visiting order over every stop of a problem. Always a permutation of
/// `0..len`; each operation below keeps it one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    stops: Vec<StopIdx>,
}

impl Tour {
    pub fn try_new(sequence: &[usize], num_stops: usize) -> Result<Self, InvalidSequenceError> {
        validate_sequence(sequence, num_stops)?;

        Ok(Tour {
            stops: sequence.iter().copied().map(StopIdx::new).collect(),
        })
    }

    pub fn identity(num_stops: usize) -> Self {
        Tour {
            stops: (0..num_stops).map(StopIdx::new).collect(),
        }
    }

    pub fn random(num_stops: usize, rng: &mut impl Rng) -> Self {
        let mut tour = Tour::identity(num_stops);
        tour.stops.shuffle(rng);
        tour
    }

    /// Only used by planners that build the order one stop at a time; the
    /// caller must have visited every stop exactly once.
    pub(crate) fn from_visits(stops: Vec<StopIdx>) -> Self {
        debug_assert!(
            validate_sequence(&stops.iter().map(|s| s.get()).collect::<Vec<_>>(), stops.len())
                .is_ok()
        );
        Tour { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[StopIdx] {
        &self.stops
    }

    pub fn first(&self) -> Option<StopIdx> {
        self.stops.first().copied()
    }

    pub fn last(&self) -> Option<StopIdx> {
        self.stops.last().copied()
    }

    pub fn to_indices(&self) -> Vec<usize> {
        self.stops.iter().map(|stop| stop.get()).collect()
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.stops.swap(a, b);
    }

    /// Swaps two distinct random positions. No-op for tours shorter than two.
    pub fn swap_random(&mut self, rng: &mut impl Rng) -> Option<(usize, usize)> {
        let (a, b) = random_distinct_pair(self.len(), rng)?;
        self.swap(a, b);
        Some((a, b))
    }

    /// Order crossover (OX): the child copies `first[start..=end]` in place,
    /// then fills the remaining positions left to right with the stops not
    /// yet present, in the order they appear in `second`.
    pub fn order_crossover(first: &Tour, second: &Tour, start: usize, end: usize) -> Tour {
        debug_assert_eq!(first.len(), second.len());
        debug_assert!(start <= end && end < first.len());

        let len = first.len();
        let mut child: Vec<Option<StopIdx>> = vec![None; len];
        let mut taken = vec![false; len];

        for position in start..=end {
            let stop = first.stops[position];
            child[position] = Some(stop);
            taken[stop.get()] = true;
        }

        let mut donors = second.stops.iter().filter(|stop| !taken[stop.get()]);
        for slot in child.iter_mut().filter(|slot| slot.is_none()) {
            *slot = donors.next().copied();
        }

        Tour {
            stops: child.into_iter().flatten().collect(),
        }
    }

    /// [`Tour::order_crossover`] with a uniformly chosen slice.
    pub fn random_order_crossover(first: &Tour, second: &Tour, rng: &mut impl Rng) -> Tour {
        if first.is_empty() {
            return first.clone();
        }

        let a = rng.random_range(0..first.len());
        let b = rng.random_range(0..first.len());
        Tour::order_crossover(first, second, a.min(b), a.max(b))
    }
}

fn random_distinct_pair(len: usize, rng: &mut impl Rng) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }

    let a = rng.random_range(0..len);
    let mut b = rng.random_range(0..len - 1);
    if b >= a {
        b += 1;
    }

    Some((a, b))
}
