use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::{errors, hive_section};

/// A physical storage location.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub code: String,
    pub is_deleted: bool,
    pub created_by: i32,
    pub last_updated_by: i32,
    pub created: DateTimeWithTimeZone,
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Sections }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sections => Entity::has_many(hive_section::Entity).into(),
        }
    }
}

impl Related<hive_section::Entity> for Entity {
    fn to() -> RelationDef { Relation::Sections.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert `row` ignoring its id; the database assigns a new one.
pub async fn insert(db: &DatabaseConnection, row: &Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(row.name.clone()),
        address: Set(row.address.clone()),
        code: Set(row.code.clone()),
        is_deleted: Set(row.is_deleted),
        created_by: Set(row.created_by),
        last_updated_by: Set(row.last_updated_by),
        created: Set(row.created),
        last_updated: Set(row.last_updated),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every mutable column of the row identified by `row.id`.
pub async fn save(db: &DatabaseConnection, row: &Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(row.id),
        name: Set(row.name.clone()),
        address: Set(row.address.clone()),
        code: Set(row.code.clone()),
        is_deleted: Set(row.is_deleted),
        created_by: Set(row.created_by),
        last_updated_by: Set(row.last_updated_by),
        created: Set(row.created),
        last_updated: Set(row.last_updated),
    };
    Ok(am.update(db).await?)
}
