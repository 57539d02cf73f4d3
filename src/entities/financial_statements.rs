//! SeaORM Entity for financial_statements table
//!
//! One row per (company_code, fiscal_year). Rows are written by the
//! ingestion pipeline and treated as immutable by this service.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "financial_statements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Securities code of the reporting company
    pub company_code: String,
    /// Reporting year of the statement
    pub fiscal_year: i32,
    /// Net sales. None means the figure was not disclosed (distinct from 0).
    pub sales: Option<i64>,
    /// Operating income
    pub operating_income: Option<i64>,
    /// Net income
    pub net_income: Option<i64>,
    /// Net assets (shareholders' equity)
    pub net_assets: Option<i64>,
    /// Total assets
    pub total_assets: Option<i64>,
    /// Cash and cash equivalents
    pub cash_equivalents: Option<i64>,
    /// Whether figures are group-consolidated
    pub is_consolidated: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
