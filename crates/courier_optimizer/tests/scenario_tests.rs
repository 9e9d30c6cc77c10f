mod setup;

use courier_optimizer::{
    error::OptimizeError,
    json::types::JsonSolverOptions,
    solver::{
        optimization_service::OptimizationService,
        planner::Algorithm,
        route_request::RouteRequest,
    },
};

use setup::{DEPOT, STOPS};

#[test]
fn test_riyadh_nearest_neighbor_follows_depot_distance() {
    let service = OptimizationService::default();
    let request = RouteRequest::new(setup::create_problem(DEPOT, &STOPS), Algorithm::NearestNeighbor);

    let route = service.solve(&request).unwrap();

    let mut by_depot_distance: Vec<usize> = (0..STOPS.len()).collect();
    by_depot_distance.sort_by(|&a, &b| {
        setup::reference_distance(DEPOT, STOPS[a])
            .total_cmp(&setup::reference_distance(DEPOT, STOPS[b]))
    });
    assert_eq!(route.sequence, by_depot_distance);
    assert_eq!(route.sequence, vec![0, 1, 3, 2]);

    let expected = setup::reference_tour_distance(DEPOT, &STOPS, &route.sequence);
    assert!((route.evaluation.total_distance.value() - expected).abs() < 1e-6);
    assert!((route.evaluation.estimated_time_minutes - expected / 50.0 * 60.0).abs() < 1e-6);
    assert!((route.evaluation.fuel_cost - expected * 0.5).abs() < 1e-6);
}

#[test]
fn test_riyadh_response_contract() {
    let service = OptimizationService::default();

    let response = service.optimize(&setup::riyadh_request_json("nearest-neighbor")).unwrap();

    assert!(response.success);
    assert_eq!(response.algorithm, "nearest-neighbor");
    assert_eq!(response.optimized_route.sequence, vec![0, 1, 3, 2]);
    assert_eq!(response.optimized_route.total_distance, 35.13);
    assert_eq!(response.optimized_route.estimated_time, 42);
    assert_eq!(response.optimized_route.fuel_cost, 17.56);
}

#[test]
fn test_unknown_algorithm_falls_back_to_nearest_neighbor() {
    let service = OptimizationService::default();

    let response = service.optimize(&setup::riyadh_request_json("bogus")).unwrap();

    assert!(response.success);
    assert_eq!(response.algorithm, "nearest-neighbor");
    assert_eq!(response.optimized_route.sequence, vec![0, 1, 3, 2]);
}

#[test]
fn test_single_stop_is_twice_the_depot_leg() {
    let service = OptimizationService::default();

    for algorithm in Algorithm::ALL {
        let request = RouteRequest::new(setup::create_problem(DEPOT, &STOPS[2..3]), algorithm);
        let route = service.solve(&request).unwrap();

        let leg = setup::reference_distance(DEPOT, STOPS[2]);
        assert_eq!(route.sequence, vec![0]);
        assert!((route.evaluation.total_distance.value() - 2.0 * leg).abs() < 1e-6);
    }
}

#[test]
fn test_zero_stops_at_engine_level() {
    let service = OptimizationService::default();

    for algorithm in Algorithm::ALL {
        let request = RouteRequest::new(setup::create_problem(DEPOT, &[]), algorithm);
        let route = service.solve(&request).unwrap();

        assert!(route.sequence.is_empty());
        assert_eq!(route.evaluation.total_distance.value(), 0.0);
    }
}

#[test]
fn test_empty_locations_rejected_by_facade() {
    let service = OptimizationService::default();
    let mut request = setup::riyadh_request_json("genetic");
    request.locations = Some(vec![]);

    assert!(matches!(
        service.optimize(&request),
        Err(OptimizeError::Validation(_))
    ));
}

#[test]
fn test_unbounded_options_rejected_before_planning() {
    let service = OptimizationService::default();
    let cases = [
        (
            "simulated-annealing",
            JsonSolverOptions {
                cooling_rate: Some(1e-17),
                ..JsonSolverOptions::default()
            },
        ),
        (
            "simulated-annealing",
            JsonSolverOptions {
                iterations_per_temperature: Some(usize::MAX),
                ..JsonSolverOptions::default()
            },
        ),
        (
            "genetic",
            JsonSolverOptions {
                population_size: Some(1_000_000_000_000),
                elite_size: Some(1),
                ..JsonSolverOptions::default()
            },
        ),
        (
            "genetic",
            JsonSolverOptions {
                generations: Some(usize::MAX),
                ..JsonSolverOptions::default()
            },
        ),
    ];

    for (algorithm, options) in cases {
        let mut request = setup::riyadh_request_json(algorithm);
        request.options = Some(options.clone());

        assert!(
            matches!(service.optimize(&request), Err(OptimizeError::Validation(_))),
            "{options:?} should be rejected"
        );
    }
}
