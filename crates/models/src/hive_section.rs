use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::{errors, hive};

/// A subdivision of a hive.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hive_sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
    pub hive_id: i32,
    pub is_deleted: bool,
    pub created_by: i32,
    pub last_updated_by: i32,
    pub created: DateTimeWithTimeZone,
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Hive }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Hive => Entity::belongs_to(hive::Entity)
                .from(Column::HiveId)
                .to(hive::Column::Id)
                .into(),
        }
    }
}

impl Related<hive::Entity> for Entity {
    fn to() -> RelationDef { Relation::Hive.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(db: &DatabaseConnection, row: &Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(row.name.clone()),
        code: Set(row.code.clone()),
        hive_id: Set(row.hive_id),
        is_deleted: Set(row.is_deleted),
        created_by: Set(row.created_by),
        last_updated_by: Set(row.last_updated_by),
        created: Set(row.created),
        last_updated: Set(row.last_updated),
    };
    Ok(am.insert(db).await?)
}

pub async fn save(db: &DatabaseConnection, row: &Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(row.id),
        name: Set(row.name.clone()),
        code: Set(row.code.clone()),
        hive_id: Set(row.hive_id),
        is_deleted: Set(row.is_deleted),
        created_by: Set(row.created_by),
        last_updated_by: Set(row.last_updated_by),
        created: Set(row.created),
        last_updated: Set(row.last_updated),
    };
    Ok(am.update(db).await?)
}
