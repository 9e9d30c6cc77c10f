use courier_optimizer::solver::optimization_service::OptimizationService;

pub struct AppState {
    pub service: OptimizationService,
}
