//! Wire models for the financial endpoints
//!
//! Field names are camelCase to match the frontend client. Monetary fields
//! stay `Option<i64>` all the way to the wire: an undisclosed figure
//! serializes as `null`, never as 0.

use serde::{Deserialize, Serialize};

use crate::entities::financial_statements;

/// One fiscal-year snapshot as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatement {
    pub id: i32,
    pub company_code: String,
    pub fiscal_year: i32,
    pub sales: Option<i64>,
    pub operating_income: Option<i64>,
    pub net_income: Option<i64>,
    pub net_assets: Option<i64>,
    pub total_assets: Option<i64>,
    pub cash_equivalents: Option<i64>,
    pub is_consolidated: bool,
}

impl From<financial_statements::Model> for FinancialStatement {
    fn from(m: financial_statements::Model) -> Self {
        Self {
            id: m.id,
            company_code: m.company_code,
            fiscal_year: m.fiscal_year,
            sales: m.sales,
            operating_income: m.operating_income,
            net_income: m.net_income,
            net_assets: m.net_assets,
            total_assets: m.total_assets,
            cash_equivalents: m.cash_equivalents,
            is_consolidated: m.is_consolidated,
        }
    }
}

/// Derived health assessment for a company's most recent statement.
///
/// `current_ratio` and `roe` are part of the published contract but the
/// current rule never computes them; they are always 0.0. Dropping them
/// would break the frontend shape, so they stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    pub company_code: String,
    pub score: i32,
    pub grade: String,
    pub equity_ratio: f64,
    pub current_ratio: f64,
    pub roe: f64,
    pub comment: String,
}
