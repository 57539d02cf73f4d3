use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FinancialStatements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FinancialStatements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FinancialStatements::CompanyCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialStatements::FiscalYear)
                            .integer()
                            .not_null(),
                    )
                    // Monetary columns are nullable: NULL means "not disclosed",
                    // which is distinct from a disclosed zero.
                    .col(ColumnDef::new(FinancialStatements::Sales).big_integer())
                    .col(ColumnDef::new(FinancialStatements::OperatingIncome).big_integer())
                    .col(ColumnDef::new(FinancialStatements::NetIncome).big_integer())
                    .col(ColumnDef::new(FinancialStatements::NetAssets).big_integer())
                    .col(ColumnDef::new(FinancialStatements::TotalAssets).big_integer())
                    .col(ColumnDef::new(FinancialStatements::CashEquivalents).big_integer())
                    .col(
                        ColumnDef::new(FinancialStatements::IsConsolidated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // One statement per company per fiscal year
        manager
            .create_index(
                Index::create()
                    .name("idx_financial_statements_code_year")
                    .table(FinancialStatements::Table)
                    .col(FinancialStatements::CompanyCode)
                    .col(FinancialStatements::FiscalYear)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FinancialStatements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FinancialStatements {
    Table,
    Id,
    CompanyCode,
    FiscalYear,
    Sales,
    OperatingIncome,
    NetIncome,
    NetAssets,
    TotalAssets,
    CashEquivalents,
    IsConsolidated,
}
