//! Create `product_categories` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductCategories::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductCategories::Id))
                    .col(string_len(ProductCategories::Name, 60))
                    .col(string_len(ProductCategories::Code, 5))
                    .col(boolean(ProductCategories::IsDeleted).default(false))
                    .col(integer(ProductCategories::CreatedBy))
                    .col(integer(ProductCategories::LastUpdatedBy))
                    .col(timestamp_with_time_zone(ProductCategories::Created))
                    .col(timestamp_with_time_zone(ProductCategories::LastUpdated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductCategories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductCategories { Table, Id, Name, Code, IsDeleted, CreatedBy, LastUpdatedBy, Created, LastUpdated }
