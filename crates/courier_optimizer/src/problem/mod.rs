pub mod coordinate;
pub mod distance_matrix;
pub mod haversine;
pub mod kilometers;
pub mod kmh;
pub mod priority;
pub mod routing_problem;
pub mod stop;
