//! Health Scoring Engine
//!
//! Turns the most recent statement's balance-sheet figures into a bounded
//! score, letter grade and comment. Stateless; every call is one store read
//! followed by a deterministic tier lookup. Store failures propagate
//! unchanged in kind.

use std::sync::Arc;

use tracing::debug;

use crate::error::{validate_company_code, AppError};
use crate::models::financial::{FinancialStatement, HealthScore};
use crate::services::statement_store::StatementStore;

/// Equity ratio in percent, sign preserved.
///
/// Computed only when total assets is disclosed and strictly positive and
/// net assets is disclosed. Anything else yields 0.0, which the tier table
/// routes to the lowest grade rather than an error.
fn equity_ratio(net_assets: Option<i64>, total_assets: Option<i64>) -> f64 {
    match (net_assets, total_assets) {
        (Some(net), Some(total)) if total > 0 => net as f64 / total as f64 * 100.0,
        _ => 0.0,
    }
}

/// Tier table, evaluated top-down, first match wins.
fn tier(equity_ratio: f64) -> (i32, &'static str, &'static str) {
    if equity_ratio >= 50.0 {
        (90, "S", "Very healthy financial condition.")
    } else if equity_ratio >= 30.0 {
        (75, "A", "Healthy financial condition.")
    } else if equity_ratio >= 20.0 {
        (60, "B", "Somewhat unstable financial condition.")
    } else if equity_ratio >= 10.0 {
        (40, "C", "Unstable financial condition.")
    } else {
        (20, "D", "Very unstable financial condition.")
    }
}

/// Scoring engine over an injected statement store.
#[derive(Clone)]
pub struct HealthScoreService {
    store: Arc<dyn StatementStore>,
}

impl HealthScoreService {
    pub fn new(store: Arc<dyn StatementStore>) -> Self {
        Self { store }
    }

    /// Score the company's most recent statement.
    ///
    /// `current_ratio` and `roe` are returned at 0.0; the current rule does
    /// not compute them (see DESIGN.md). `cash_equivalents` is likewise
    /// fetched with the statement but unused.
    pub async fn evaluate(&self, code: &str) -> Result<HealthScore, AppError> {
        validate_company_code(code)?;

        let statement = self.store.latest(code).await?;
        let ratio = equity_ratio(statement.net_assets, statement.total_assets);
        let (score, grade, comment) = tier(ratio);

        debug!(
            company_code = code,
            fiscal_year = statement.fiscal_year,
            equity_ratio = ratio,
            score,
            grade,
            "health score computed"
        );

        Ok(HealthScore {
            company_code: code.to_string(),
            score,
            grade: grade.to_string(),
            equity_ratio: ratio,
            current_ratio: 0.0,
            roe: 0.0,
            comment: comment.to_string(),
        })
    }

    /// Statements for the company, newest first, at most `years` entries.
    pub async fn list_statements(
        &self,
        code: &str,
        years: u64,
    ) -> Result<Vec<FinancialStatement>, AppError> {
        validate_company_code(code)?;

        let statements = self.store.recent(code, years).await?;
        Ok(statements.into_iter().map(FinancialStatement::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{companies, financial_statements};

    /// In-memory store with a fixed set of statements.
    struct FixedStore {
        statements: Vec<financial_statements::Model>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl StatementStore for FixedStore {
        async fn latest(&self, code: &str) -> Result<financial_statements::Model, AppError> {
            if self.fail {
                return Err(AppError::retrieval(
                    format!("fetching latest statement for code {code}"),
                    sea_orm::DbErr::Custom("boom".to_string()),
                ));
            }
            self.statements
                .iter()
                .filter(|s| s.company_code == code)
                .max_by_key(|s| s.fiscal_year)
                .cloned()
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "no financial statement found for company code {code}"
                    ))
                })
        }

        async fn recent(
            &self,
            code: &str,
            max_count: u64,
        ) -> Result<Vec<financial_statements::Model>, AppError> {
            let mut rows: Vec<_> = self
                .statements
                .iter()
                .filter(|s| s.company_code == code)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.fiscal_year.cmp(&a.fiscal_year));
            rows.truncate(max_count as usize);
            Ok(rows)
        }

        async fn company(&self, code: &str) -> Result<companies::Model, AppError> {
            Err(AppError::NotFound(format!("no company found for code {code}")))
        }
    }

    fn statement(net_assets: Option<i64>, total_assets: Option<i64>) -> financial_statements::Model {
        financial_statements::Model {
            id: 1,
            company_code: "7203".to_string(),
            fiscal_year: 2024,
            sales: Some(1_000),
            operating_income: Some(100),
            net_income: Some(60),
            net_assets,
            total_assets,
            cash_equivalents: Some(200),
            is_consolidated: true,
        }
    }

    fn engine_with(statements: Vec<financial_statements::Model>) -> HealthScoreService {
        HealthScoreService::new(Arc::new(FixedStore {
            statements,
            fail: false,
        }))
    }

    #[test]
    fn test_equity_ratio_sign_preserved() {
        assert_eq!(equity_ratio(Some(600), Some(1_000)), 60.0);
        assert_eq!(equity_ratio(Some(-50), Some(1_000)), -5.0);
    }

    #[test]
    fn test_equity_ratio_missing_or_nonpositive_total_is_zero() {
        assert_eq!(equity_ratio(Some(600), None), 0.0);
        assert_eq!(equity_ratio(None, Some(1_000)), 0.0);
        assert_eq!(equity_ratio(Some(600), Some(0)), 0.0);
        assert_eq!(equity_ratio(Some(600), Some(-10)), 0.0);
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(tier(50.0), (90, "S", "Very healthy financial condition."));
        assert_eq!(tier(49.999).0, 75);
        assert_eq!(tier(30.0).1, "A");
        assert_eq!(tier(29.999).1, "B");
        assert_eq!(tier(20.0).1, "B");
        assert_eq!(tier(10.0).1, "C");
        assert_eq!(tier(9.999).1, "D");
        assert_eq!(tier(0.0).1, "D");
        assert_eq!(tier(-5.0), (20, "D", "Very unstable financial condition."));
    }

    #[tokio::test]
    async fn test_evaluate_healthy_company() {
        let engine = engine_with(vec![statement(Some(600), Some(1_000))]);
        let score = engine.evaluate("7203").await.unwrap();
        assert_eq!(score.equity_ratio, 60.0);
        assert_eq!(score.score, 90);
        assert_eq!(score.grade, "S");
        assert_eq!(score.company_code, "7203");
        // Placeholder metrics stay at their zero default
        assert_eq!(score.current_ratio, 0.0);
        assert_eq!(score.roe, 0.0);
    }

    #[tokio::test]
    async fn test_evaluate_unstable_company() {
        let engine = engine_with(vec![statement(Some(150), Some(1_000))]);
        let score = engine.evaluate("7203").await.unwrap();
        assert_eq!(score.equity_ratio, 15.0);
        assert_eq!(score.score, 40);
        assert_eq!(score.grade, "C");
    }

    #[tokio::test]
    async fn test_evaluate_negative_equity_is_lowest_tier() {
        let engine = engine_with(vec![statement(Some(-50), Some(1_000))]);
        let score = engine.evaluate("7203").await.unwrap();
        assert_eq!(score.equity_ratio, -5.0);
        assert_eq!(score.score, 20);
        assert_eq!(score.grade, "D");
    }

    #[tokio::test]
    async fn test_evaluate_undisclosed_total_assets_falls_to_lowest_tier() {
        let engine = engine_with(vec![statement(Some(600), None)]);
        let score = engine.evaluate("7203").await.unwrap();
        assert_eq!(score.equity_ratio, 0.0);
        assert_eq!(score.score, 20);
        assert_eq!(score.grade, "D");
    }

    #[tokio::test]
    async fn test_evaluate_scores_only_the_latest_year() {
        let old = financial_statements::Model {
            fiscal_year: 2020,
            net_assets: Some(100),
            ..statement(Some(100), Some(1_000))
        };
        let new = financial_statements::Model {
            id: 2,
            fiscal_year: 2024,
            ..statement(Some(600), Some(1_000))
        };
        let engine = engine_with(vec![old, new]);
        let score = engine.evaluate("7203").await.unwrap();
        assert_eq!(score.grade, "S");
    }

    #[tokio::test]
    async fn test_evaluate_unknown_code_is_not_found_without_score() {
        let engine = engine_with(vec![]);
        let err = engine.evaluate("9999").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_evaluate_store_failure_propagates_as_retrieval() {
        let engine = HealthScoreService::new(Arc::new(FixedStore {
            statements: vec![],
            fail: true,
        }));
        let err = engine.evaluate("7203").await.unwrap_err();
        assert!(matches!(err, AppError::Retrieval { .. }));
    }

    #[tokio::test]
    async fn test_evaluate_blank_code_rejected_before_store() {
        let engine = engine_with(vec![]);
        let err = engine.evaluate("  ").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_list_statements_bounded_and_sorted() {
        let mut rows = Vec::new();
        for (i, year) in [2020, 2021, 2022, 2023, 2024, 2025].iter().enumerate() {
            rows.push(financial_statements::Model {
                id: i as i32 + 1,
                fiscal_year: *year,
                ..statement(Some(600), Some(1_000))
            });
        }
        let engine = engine_with(rows);

        let listed = engine.list_statements("7203", 5).await.unwrap();
        assert_eq!(listed.len(), 5);
        assert_eq!(listed[0].fiscal_year, 2025);
        assert!(listed.windows(2).all(|w| w[0].fiscal_year >= w[1].fiscal_year));
        assert!(listed.iter().all(|s| s.company_code == "7203"));
    }
}
