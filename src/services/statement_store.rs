//! Statement Store
//!
//! Read-only access to persisted financial statements and company records.
//! Behind a trait so the scoring engine takes the store as an injected
//! dependency instead of reaching for a global connection.
//!
//! Every read runs inside its own short-lived transaction: commit on
//! success, and dropping the transaction on any early return rolls it back.
//! Single attempt per call, no caching, no retries.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::entities::{
    companies, financial_statements,
    prelude::{Companies, FinancialStatements},
};
use crate::error::AppError;

#[async_trait]
pub trait StatementStore: Send + Sync {
    /// Most recent statement for the company, by fiscal year.
    ///
    /// An empty table for the code is `AppError::NotFound`, never a default
    /// statement; storage malfunction is `AppError::Retrieval`.
    async fn latest(&self, code: &str) -> Result<financial_statements::Model, AppError>;

    /// Up to `max_count` statements for the company, newest fiscal year
    /// first. May be empty.
    async fn recent(
        &self,
        code: &str,
        max_count: u64,
    ) -> Result<Vec<financial_statements::Model>, AppError>;

    /// Company record for the securities code.
    async fn company(&self, code: &str) -> Result<companies::Model, AppError>;
}

/// Postgres-backed store used in production.
pub struct PgStatementStore {
    db: DatabaseConnection,
}

impl PgStatementStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatementStore for PgStatementStore {
    async fn latest(&self, code: &str) -> Result<financial_statements::Model, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::retrieval(format!("starting read for code {code}"), e))?;

        let found = FinancialStatements::find()
            .filter(financial_statements::Column::CompanyCode.eq(code))
            .order_by_desc(financial_statements::Column::FiscalYear)
            .one(&txn)
            .await
            .map_err(|e| {
                AppError::retrieval(format!("fetching latest statement for code {code}"), e)
            })?;

        txn.commit()
            .await
            .map_err(|e| AppError::retrieval(format!("finishing read for code {code}"), e))?;

        found.ok_or_else(|| {
            AppError::NotFound(format!("no financial statement found for company code {code}"))
        })
    }

    async fn recent(
        &self,
        code: &str,
        max_count: u64,
    ) -> Result<Vec<financial_statements::Model>, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::retrieval(format!("starting read for code {code}"), e))?;

        let statements = FinancialStatements::find()
            .filter(financial_statements::Column::CompanyCode.eq(code))
            .order_by_desc(financial_statements::Column::FiscalYear)
            .limit(max_count)
            .all(&txn)
            .await
            .map_err(|e| {
                AppError::retrieval(format!("fetching statements for code {code}"), e)
            })?;

        txn.commit()
            .await
            .map_err(|e| AppError::retrieval(format!("finishing read for code {code}"), e))?;

        Ok(statements)
    }

    async fn company(&self, code: &str) -> Result<companies::Model, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::retrieval(format!("starting read for code {code}"), e))?;

        let found = Companies::find_by_id(code)
            .one(&txn)
            .await
            .map_err(|e| AppError::retrieval(format!("fetching company for code {code}"), e))?;

        txn.commit()
            .await
            .map_err(|e| AppError::retrieval(format!("finishing read for code {code}"), e))?;

        found.ok_or_else(|| AppError::NotFound(format!("no company found for code {code}")))
    }
}
