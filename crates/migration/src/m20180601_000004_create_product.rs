//! Create `products` table.
//! Products belong to one category; purging a category removes its products.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::Name, 60))
                    .col(string_len(Products::Code, 5))
                    .col(integer(Products::CategoryId))
                    .col(string_len_null(Products::Description, 300))
                    .col(string_len_null(Products::ManufacturerCode, 10))
                    .col(decimal_len(Products::Price, 18, 2))
                    .col(boolean(Products::IsDeleted).default(false))
                    .col(integer(Products::CreatedBy))
                    .col(integer(Products::LastUpdatedBy))
                    .col(timestamp_with_time_zone(Products::Created))
                    .col(timestamp_with_time_zone(Products::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category")
                            .from(Products::Table, Products::CategoryId)
                            .to(ProductCategories::Table, ProductCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category_id")
                    .table(Products::Table)
                    .col(Products::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Code,
    CategoryId,
    Description,
    ManufacturerCode,
    Price,
    IsDeleted,
    CreatedBy,
    LastUpdatedBy,
    Created,
    LastUpdated,
}

#[derive(DeriveIden)]
enum ProductCategories { Table, Id }
