//! Create `hives` table.
//!
//! Root of the storage hierarchy; sections reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hives::Table)
                    .if_not_exists()
                    .col(pk_auto(Hives::Id))
                    .col(string_len(Hives::Name, 60))
                    .col(string_len(Hives::Address, 300))
                    .col(string_len(Hives::Code, 5))
                    .col(boolean(Hives::IsDeleted).default(false))
                    .col(integer(Hives::CreatedBy))
                    .col(integer(Hives::LastUpdatedBy))
                    .col(timestamp_with_time_zone(Hives::Created))
                    .col(timestamp_with_time_zone(Hives::LastUpdated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Hives::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Hives { Table, Id, Name, Address, Code, IsDeleted, CreatedBy, LastUpdatedBy, Created, LastUpdated }
