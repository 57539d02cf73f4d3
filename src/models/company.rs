//! Wire model for the company lookup endpoint

use serde::{Deserialize, Serialize};

use crate::entities::companies;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub code: String,
    pub name: String,
    pub industry: String,
}

impl From<companies::Model> for Company {
    fn from(m: companies::Model) -> Self {
        Self {
            code: m.code,
            name: m.name,
            industry: m.industry,
        }
    }
}
