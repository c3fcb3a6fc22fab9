//! Create `hive_sections` table.
//! Each section belongs to exactly one hive; purging a hive removes its sections.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HiveSections::Table)
                    .if_not_exists()
                    .col(pk_auto(HiveSections::Id))
                    .col(string_len(HiveSections::Name, 60))
                    .col(string_len(HiveSections::Code, 5))
                    .col(integer(HiveSections::HiveId))
                    .col(boolean(HiveSections::IsDeleted).default(false))
                    .col(integer(HiveSections::CreatedBy))
                    .col(integer(HiveSections::LastUpdatedBy))
                    .col(timestamp_with_time_zone(HiveSections::Created))
                    .col(timestamp_with_time_zone(HiveSections::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hive_sections_hive")
                            .from(HiveSections::Table, HiveSections::HiveId)
                            .to(Hives::Table, Hives::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hive_sections_hive_id")
                    .table(HiveSections::Table)
                    .col(HiveSections::HiveId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(HiveSections::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HiveSections {
    Table,
    Id,
    Name,
    Code,
    HiveId,
    IsDeleted,
    CreatedBy,
    LastUpdatedBy,
    Created,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Hives { Table, Id }
