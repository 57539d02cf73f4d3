// src/lib.rs

use std::sync::Arc;

use axum::{http::Method, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use services::{health_score::HealthScoreService, statement_store::StatementStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StatementStore>,
    pub health: HealthScoreService,
}

impl AppState {
    /// Wire the engine and controller to one store instance.
    pub fn new(store: Arc<dyn StatementStore>) -> Self {
        let health = HealthScoreService::new(store.clone());
        Self { store, health }
    }
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(liveness))
        .route(
            "/api/v1/companies/{code}",
            get(handlers::company::get_company),
        )
        .route(
            "/api/v1/companies/{code}/financials",
            get(handlers::company::get_financials),
        )
        .route(
            "/api/v1/companies/{code}/health",
            get(handlers::company::get_health),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub mod entities {
    pub mod prelude;
    pub mod companies;
    pub mod financial_statements;
}

pub mod services {
    pub mod health_score;
    pub mod statement_store;
}

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
