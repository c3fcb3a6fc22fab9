//! Add the optional `category_description` column to `product_categories`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(ProductCategories::Table)
                    .add_column(string_len_null(ProductCategories::CategoryDescription, 300))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(ProductCategories::Table)
                    .drop_column(ProductCategories::CategoryDescription)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ProductCategories { Table, CategoryDescription }
