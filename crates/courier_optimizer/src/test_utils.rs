use crate::problem::{
    coordinate::Coordinate,
    priority::Priority,
    routing_problem::RoutingProblem,
    stop::Stop,
};

pub const RIYADH_DEPOT: (f64, f64) = (24.7136, 46.6753);

pub const RIYADH_STOPS: [(f64, f64); 4] = [
    (24.7246, 46.6891),
    (24.6877, 46.7219),
    (24.7744, 46.7386),
    (24.6478, 46.7176),
];

pub fn create_stop(lat: f64, lng: f64, priority: u32) -> Stop {
    Stop::new(
        Coordinate::try_new(lat, lng).unwrap(),
        format!("{lat},{lng}"),
        Priority::try_from_number(f64::from(priority)).unwrap(),
    )
}

pub fn create_problem(depot: (f64, f64), stops: &[(f64, f64, u32)]) -> RoutingProblem {
    RoutingProblem::new(
        create_stop(depot.0, depot.1, 1),
        stops
            .iter()
            .map(|&(lat, lng, priority)| create_stop(lat, lng, priority))
            .collect(),
        Some(100.0),
    )
}

pub fn riyadh_problem() -> RoutingProblem {
    let stops: Vec<(f64, f64, u32)> = RIYADH_STOPS
        .iter()
        .map(|&(lat, lng)| (lat, lng, 1))
        .collect();
    create_problem(RIYADH_DEPOT, &stops)
}

/// Stops laid out on a `rows` x `cols` lattice 0.01 degrees apart, north
/// east of the depot.
pub fn grid_problem(rows: usize, cols: usize) -> RoutingProblem {
    let stops: Vec<(f64, f64, u32)> = (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| {
                (
                    RIYADH_DEPOT.0 + 0.01 * (row as f64 + 1.0),
                    RIYADH_DEPOT.1 + 0.01 * (col as f64 + 1.0),
                    1,
                )
            })
        })
        .collect();
    create_problem(RIYADH_DEPOT, &stops)
}
