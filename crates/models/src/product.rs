use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::{errors, product_category};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub manufacturer_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,
    pub is_deleted: bool,
    pub created_by: i32,
    pub last_updated_by: i32,
    pub created: DateTimeWithTimeZone,
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(product_category::Entity)
                .from(Column::CategoryId)
                .to(product_category::Column::Id)
                .into(),
        }
    }
}

impl Related<product_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(db: &DatabaseConnection, row: &Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(row.name.clone()),
        code: Set(row.code.clone()),
        category_id: Set(row.category_id),
        description: Set(row.description.clone()),
        manufacturer_code: Set(row.manufacturer_code.clone()),
        price: Set(row.price),
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
        category_id: Set(row.category_id),
        description: Set(row.description.clone()),
        manufacturer_code: Set(row.manufacturer_code.clone()),
        price: Set(row.price),
        is_deleted: Set(row.is_deleted),
        created_by: Set(row.created_by),
        last_updated_by: Set(row.last_updated_by),
        created: Set(row.created),
        last_updated: Set(row.last_updated),
    };
    Ok(am.update(db).await?)
}
