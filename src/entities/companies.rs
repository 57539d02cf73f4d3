//! SeaORM Entity for companies table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    /// Securities code (e.g., "7203")
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    /// Registered company name
    pub name: String,
    /// Industry classification label
    pub industry: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
