use rand::{Rng, seq::IndexedRandom};

use crate::problem::kilometers::Kilometers;

use super::{evaluator::RouteEvaluator, tour::Tour};

#[derive(Debug, Clone)]
pub struct Individual {
    pub tour: Tour,
    pub distance: Kilometers,
}

/// The candidates of one genetic generation, kept sorted by ascending
/// distance.
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn evaluate(tours: Vec<Tour>, evaluator: &RouteEvaluator) -> Self {
        let mut individuals: Vec<Individual> = tours
            .into_iter()
            .map(|tour| Individual {
                distance: evaluator.distance(&tour),
                tour,
            })
            .collect();

        // Stable, so equal distances keep their generation order.
        individuals.sort_by(|a, b| a.distance.cmp(&b.distance));

        Population { individuals }
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    pub fn elites(&self, count: usize) -> impl Iterator<Item = &Individual> {
        self.individuals.iter().take(count)
    }

    /// Picks uniformly among the `pool_size` best individuals.
    pub fn select_parent(&self, pool_size: usize, rng: &mut impl Rng) -> Option<&Individual> {
        let pool = &self.individuals[..pool_size.min(self.individuals.len())];
        pool.choose(rng)
    }

    pub fn into_best(self) -> Option<Individual> {
        self.individuals.into_iter().next()
    }
}
