use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use financial_checker_backend::entities::financial_statements;
use financial_checker_backend::services::statement_store::PgStatementStore;
use financial_checker_backend::{app, AppState};

/// Build the full application router over the given (mock) connection.
pub fn test_app(db: DatabaseConnection) -> Router {
    let state = AppState::new(Arc::new(PgStatementStore::new(db)));
    app(state)
}

/// Statement row builder with sensible defaults for the 7203 fixture company.
#[allow(dead_code)]
pub fn statement(
    id: i32,
    fiscal_year: i32,
    net_assets: Option<i64>,
    total_assets: Option<i64>,
) -> financial_statements::Model {
    financial_statements::Model {
        id,
        company_code: "7203".to_string(),
        fiscal_year,
        sales: Some(30_000_000),
        operating_income: Some(2_800_000),
        net_income: None,
        net_assets,
        total_assets,
        cash_equivalents: Some(5_000_000),
        is_consolidated: true,
    }
}
