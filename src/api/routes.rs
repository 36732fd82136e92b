use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::auth::attach_identity;
use crate::api::handlers::{
    health::health_check,
    rankings::{get_global_ranking, get_ranking_history, get_regional_ranking},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/rankings/regional", get(get_regional_ranking))
        .route("/api/rankings/global", get(get_global_ranking))
        .route("/api/rankings/history", get(get_ranking_history))
        .route("/api/rankings/history/:player_id", get(get_ranking_history))
        .layer(middleware::from_fn_with_state(state.clone(), attach_identity))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
