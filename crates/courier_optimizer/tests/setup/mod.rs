#![allow(dead_code)]

pub mod mock_rng;

use courier_optimizer::{
    json::types::JsonOptimizeRouteRequest,
    problem::{
        coordinate::Coordinate, priority::Priority, routing_problem::RoutingProblem, stop::Stop,
    },
};
use serde_json::json;

pub const DEPOT: (f64, f64) = (24.7136, 46.6753);

pub const STOPS: [(f64, f64); 4] = [
    (24.7246, 46.6891),
    (24.6877, 46.7219),
    (24.7744, 46.7386),
    (24.6478, 46.7176),
];

pub fn create_stop(lat: f64, lng: f64) -> Stop {
    Stop::new(
        Coordinate::try_new(lat, lng).unwrap(),
        String::new(),
        Priority::default(),
    )
}

pub fn create_problem(depot: (f64, f64), stops: &[(f64, f64)]) -> RoutingProblem {
    RoutingProblem::new(
        create_stop(depot.0, depot.1),
        stops
            .iter()
            .map(|&(lat, lng)| create_stop(lat, lng))
            .collect(),
        None,
    )
}

/// Pseudo-random stops scattered within ~5 km of the depot.
pub fn scattered_problem(num_stops: usize) -> RoutingProblem {
    let stops: Vec<(f64, f64)> = (0..num_stops)
        .map(|i| {
            let angle = i as f64 * 2.399_963;
            let radius = 0.005 + 0.04 * ((i * 7919) % 97) as f64 / 97.0;
            (
                DEPOT.0 + radius * angle.sin(),
                DEPOT.1 + radius * angle.cos(),
            )
        })
        .collect();
    create_problem(DEPOT, &stops)
}

pub fn riyadh_request_json(algorithm: &str) -> JsonOptimizeRouteRequest {
    let locations: Vec<_> = STOPS
        .iter()
        .enumerate()
        .map(|(index, &(lat, lng))| {
            json!({ "lat": lat, "lng": lng, "address": format!("Stop {index}"), "priority": 1 })
        })
        .collect();

    serde_json::from_value(json!({
        "locations": locations,
        "vehicleCapacity": 50,
        "startLocation": { "lat": DEPOT.0, "lng": DEPOT.1, "address": "Depot", "priority": 1 },
        "algorithm": algorithm,
    }))
    .unwrap()
}

/// Haversine written out independently of the crate.
pub fn reference_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lng1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lng2) = (b.0.to_radians(), b.1.to_radians());
    let h = ((lat2 - lat1) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lng2 - lng1) / 2.0).sin().powi(2);
    2.0 * 6371.0 * h.sqrt().asin()
}

pub fn reference_tour_distance(depot: (f64, f64), stops: &[(f64, f64)], sequence: &[usize]) -> f64 {
    let mut points = vec![depot];
    points.extend(sequence.iter().map(|&i| stops[i]));
    points.push(depot);
    points
        .windows(2)
        .map(|pair| reference_distance(pair[0], pair[1]))
        .sum()
}

pub fn is_permutation(sequence: &[usize], len: usize) -> bool {
    let mut sorted = sequence.to_vec();
    sorted.sort_unstable();
    sorted == (0..len).collect::<Vec<_>>()
}
