//! Company endpoint handlers
//!
//! GET /api/v1/companies/{code}            - company record
//! GET /api/v1/companies/{code}/financials - recent statements (newest first)
//! GET /api/v1/companies/{code}/health     - derived health score

use axum::{extract::Path, extract::State, Json};
use tracing::{error, info};

use crate::error::{validate_company_code, AppError};
use crate::models::company::Company;
use crate::models::financial::{FinancialStatement, HealthScore};
use crate::models::response::ApiResponse;
use crate::AppState;

/// Years of history returned by the financials listing.
const STATEMENT_YEARS: u64 = 5;

/// Get a company's financial statements for the last few fiscal years.
pub async fn get_financials(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<FinancialStatement>>>, AppError> {
    info!(company_code = %code, "financial statements requested");

    let statements = state
        .health
        .list_statements(&code, STATEMENT_YEARS)
        .await
        .inspect_err(|e| error!(company_code = %code, error = %e, "failed to fetch statements"))?;

    info!(company_code = %code, count = statements.len(), "financial statements returned");

    Ok(Json(ApiResponse::success(
        "financial statements retrieved",
        statements,
    )))
}

/// Get the health score derived from a company's most recent statement.
pub async fn get_health(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<HealthScore>>, AppError> {
    info!(company_code = %code, "health score requested");

    let score = state
        .health
        .evaluate(&code)
        .await
        .inspect_err(|e| error!(company_code = %code, error = %e, "failed to compute health score"))?;

    info!(
        company_code = %code,
        score = score.score,
        grade = %score.grade,
        "health score returned"
    );

    Ok(Json(ApiResponse::success("health score computed", score)))
}

/// Get a company record by securities code.
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Company>>, AppError> {
    validate_company_code(&code)?;

    let company = state
        .store
        .company(&code)
        .await
        .inspect_err(|e| error!(company_code = %code, error = %e, "failed to fetch company"))?;

    Ok(Json(ApiResponse::success(
        "company retrieved",
        Company::from(company),
    )))
}
