pub mod evaluator;
pub mod genetic;
pub mod nearest_neighbor;
pub mod optimization_service;
pub mod planner;
pub mod population;
pub mod route_request;
pub mod simulated_annealing;
pub mod solver_params;
pub mod tour;
