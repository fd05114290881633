use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::state::AppState;
use crate::views::{self, InfoPage};

pub fn create_health_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(info))
}

/// GET /health - 200 si la base responde, 500 si no
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.vehicles.ping().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Database connection failed")
    }
}

/// GET /info - página de diagnóstico
async fn info(State(state): State<AppState>) -> Html<String> {
    let db_ok = state.vehicles.ping().await;
    let config = &state.config;

    Html(views::info_page(&InfoPage {
        db_ok,
        db_address: config.database.address(),
        database: &config.database.database,
        user: &config.database.user,
        namespace: config.environment.namespace_or_default(),
    }))
}
