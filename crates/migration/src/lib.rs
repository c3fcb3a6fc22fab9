//! Migrator registering entity-specific migrations in dependency order.
//! Column additions come after the tables they alter.
pub use sea_orm_migration::prelude::*;

mod m20180601_000001_create_hive;
mod m20180601_000002_create_hive_section;
mod m20180601_000003_create_product_category;
mod m20180601_000004_create_product;
mod m20180613_103958_add_category_description;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20180601_000001_create_hive::Migration),
            Box::new(m20180601_000002_create_hive_section::Migration),
            Box::new(m20180601_000003_create_product_category::Migration),
            Box::new(m20180601_000004_create_product::Migration),
            Box::new(m20180613_103958_add_category_description::Migration),
        ]
    }
}
