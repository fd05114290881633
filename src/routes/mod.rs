pub mod health_routes;
pub mod vehicle_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(vehicle_routes::create_vehicle_router())
        .merge(health_routes::create_health_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
