pub use super::companies::Entity as Companies;
pub use super::financial_statements::Entity as FinancialStatements;
