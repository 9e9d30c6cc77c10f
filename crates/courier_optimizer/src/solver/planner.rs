use std::{fmt, str::FromStr};

use rand::Rng;
use thiserror::Error;

use crate::problem::routing_problem::RoutingProblem;

use super::{
    genetic::GeneticPlanner, nearest_neighbor::NearestNeighborPlanner,
    simulated_annealing::SimulatedAnnealingPlanner, solver_params::SolverParams, tour::Tour,
};

pub trait PlanRoute {
    /// Produces a visiting order over every stop of `problem`.
    fn plan(&self, problem: &RoutingProblem, rng: &mut impl Rng) -> Tour;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    NearestNeighbor,
    Genetic,
    SimulatedAnnealing,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::NearestNeighbor,
        Algorithm::Genetic,
        Algorithm::SimulatedAnnealing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "nearest-neighbor",
            Algorithm::Genetic => "genetic",
            Algorithm::SimulatedAnnealing => "simulated-annealing",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm \"{0}\"")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == value)
            .ok_or_else(|| UnknownAlgorithm(value.to_owned()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub enum RoutePlanner {
    NearestNeighbor(NearestNeighborPlanner),
    Genetic(GeneticPlanner),
    SimulatedAnnealing(SimulatedAnnealingPlanner),
}

impl RoutePlanner {
    pub fn new(algorithm: Algorithm, params: &SolverParams) -> Self {
        match algorithm {
            Algorithm::NearestNeighbor => RoutePlanner::NearestNeighbor(NearestNeighborPlanner),
            Algorithm::Genetic => RoutePlanner::Genetic(GeneticPlanner::new(params.genetic.clone())),
            Algorithm::SimulatedAnnealing => RoutePlanner::SimulatedAnnealing(
                SimulatedAnnealingPlanner::new(params.annealing.clone()),
            ),
        }
    }
}

impl PlanRoute for RoutePlanner {
    fn plan(&self, problem: &RoutingProblem, rng: &mut impl Rng) -> Tour {
        match self {
            RoutePlanner::NearestNeighbor(planner) => planner.plan(problem, rng),
            RoutePlanner::Genetic(planner) => planner.plan(problem, rng),
            RoutePlanner::SimulatedAnnealing(planner) => planner.plan(problem, rng),
        }
    }
}
