use crate::error::OptimizeError;

pub const MAX_POPULATION_SIZE: usize = 10_000;
pub const MAX_GENERATIONS: usize = 100_000;
/// Upper bound on `populationSize × generations` tours built by one run.
pub const MAX_GENETIC_OFFSPRING: usize = 10_000_000;
pub const MAX_ITERATIONS_PER_TEMPERATURE: usize = 100_000;
/// Upper bound on `temperature levels × iterationsPerTemperature` moves.
pub const MAX_ANNEALING_MOVES: f64 = 10_000_000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct GeneticParams {
    pub population_size: usize,
    pub generations: usize,
    pub elite_size: usize,
    pub mutation_rate: f64,
}

impl Default for GeneticParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            elite_size: 5,
            mutation_rate: 0.10,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnealingParams {
    pub initial_temperature: f64,
    /// Multiplicative: `T <- T * (1 - cooling_rate)` after each level.
    pub cooling_rate: f64,
    pub iterations_per_temperature: usize,
}

impl Default for AnnealingParams {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.003,
            iterations_per_temperature: 100,
        }
    }
}

impl AnnealingParams {
    /// Closed-form count of cooling steps until `T <= 1`. Infinite when the
    /// cooling factor rounds to 1.
    pub fn estimated_temperature_levels(&self) -> f64 {
        if self.initial_temperature <= 1.0 {
            return 0.0;
        }
        if 1.0 - self.cooling_rate >= 1.0 {
            return f64::INFINITY;
        }

        (self.initial_temperature.ln() / -(-self.cooling_rate).ln_1p()).ceil()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolverParams {
    pub genetic: GeneticParams,
    pub annealing: AnnealingParams,
    /// Fixed seed for every run. A fresh one is drawn per run when absent.
    pub seed: Option<u64>,
}

/// Per-request adjustments on top of the service's [`SolverParams`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolverOverrides {
    pub seed: Option<u64>,
    pub population_size: Option<usize>,
    pub generations: Option<usize>,
    pub elite_size: Option<usize>,
    pub mutation_rate: Option<f64>,
    pub initial_temperature: Option<f64>,
    pub cooling_rate: Option<f64>,
    pub iterations_per_temperature: Option<usize>,
}

impl SolverParams {
    pub fn with_overrides(&self, overrides: &SolverOverrides) -> SolverParams {
        SolverParams {
            genetic: GeneticParams {
                population_size: overrides
                    .population_size
                    .unwrap_or(self.genetic.population_size),
                generations: overrides.generations.unwrap_or(self.genetic.generations),
                elite_size: overrides.elite_size.unwrap_or(self.genetic.elite_size),
                mutation_rate: overrides.mutation_rate.unwrap_or(self.genetic.mutation_rate),
            },
            annealing: AnnealingParams {
                initial_temperature: overrides
                    .initial_temperature
                    .unwrap_or(self.annealing.initial_temperature),
                cooling_rate: overrides.cooling_rate.unwrap_or(self.annealing.cooling_rate),
                iterations_per_temperature: overrides
                    .iterations_per_temperature
                    .unwrap_or(self.annealing.iterations_per_temperature),
            },
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn validate(&self) -> Result<(), OptimizeError> {
        let genetic = &self.genetic;
        if !(1..=MAX_POPULATION_SIZE).contains(&genetic.population_size) {
            return Err(OptimizeError::validation(format!(
                "populationSize must be between 1 and {MAX_POPULATION_SIZE}"
            )));
        }
        if genetic.generations > MAX_GENERATIONS {
            return Err(OptimizeError::validation(format!(
                "generations must be at most {MAX_GENERATIONS}"
            )));
        }
        if genetic.population_size * genetic.generations > MAX_GENETIC_OFFSPRING {
            return Err(OptimizeError::validation(format!(
                "populationSize × generations must be at most {MAX_GENETIC_OFFSPRING}"
            )));
        }
        if genetic.elite_size == 0 || genetic.elite_size > genetic.population_size {
            return Err(OptimizeError::validation(format!(
                "eliteSize must be between 1 and populationSize ({})",
                genetic.population_size
            )));
        }
        if !(0.0..=1.0).contains(&genetic.mutation_rate) {
            return Err(OptimizeError::validation("mutationRate must be within [0, 1]"));
        }

        let annealing = &self.annealing;
        if !annealing.initial_temperature.is_finite() || annealing.initial_temperature <= 0.0 {
            return Err(OptimizeError::validation(
                "initialTemperature must be a positive number",
            ));
        }
        if !(annealing.cooling_rate > 0.0 && annealing.cooling_rate < 1.0) {
            return Err(OptimizeError::validation("coolingRate must be within (0, 1)"));
        }
        if 1.0 - annealing.cooling_rate >= 1.0 {
            return Err(OptimizeError::validation(
                "coolingRate is too small to lower the temperature",
            ));
        }
        if !(1..=MAX_ITERATIONS_PER_TEMPERATURE).contains(&annealing.iterations_per_temperature) {
            return Err(OptimizeError::validation(format!(
                "iterationsPerTemperature must be between 1 and {MAX_ITERATIONS_PER_TEMPERATURE}"
            )));
        }

        let moves = annealing.estimated_temperature_levels()
            * annealing.iterations_per_temperature as f64;
        if moves > MAX_ANNEALING_MOVES {
            return Err(OptimizeError::validation(format!(
                "annealing schedule needs {moves:.0} moves, at most {MAX_ANNEALING_MOVES:.0} are allowed"
            )));
        }

        Ok(())
    }
}
