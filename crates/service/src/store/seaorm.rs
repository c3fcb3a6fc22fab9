use async_trait::async_trait;
use models::{hive, hive_section, product, product_category};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};

use super::{EntitySet, ProductStoreContext, ProductStoreHiveContext};
use crate::errors::ServiceError;
use crate::pagination::Window;

macro_rules! seaorm_set {
    ($set:ident, $module:ident) => {
        #[derive(Clone)]
        pub struct $set {
            db: DatabaseConnection,
        }

        #[async_trait]
        impl EntitySet<$module::Model> for $set {
            async fn all(&self) -> Result<Vec<$module::Model>, ServiceError> {
                Ok($module::Entity::find()
                    .order_by_asc($module::Column::Id)
                    .all(&self.db)
                    .await?)
            }

            async fn page(&self, window: Window) -> Result<Vec<$module::Model>, ServiceError> {
                Ok($module::Entity::find()
                    .order_by_asc($module::Column::Id)
                    .offset(window.start)
                    .limit(window.amount)
                    .all(&self.db)
                    .await?)
            }

            async fn find(&self, id: i32) -> Result<Option<$module::Model>, ServiceError> {
                Ok($module::Entity::find_by_id(id).one(&self.db).await?)
            }

            async fn add(&self, entity: $module::Model) -> Result<$module::Model, ServiceError> {
                Ok($module::insert(&self.db, &entity).await?)
            }

            async fn save(&self, entity: $module::Model) -> Result<$module::Model, ServiceError> {
                Ok($module::save(&self.db, &entity).await?)
            }

            async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
                let res = $module::Entity::delete_by_id(id).exec(&self.db).await?;
                Ok(res.rows_affected > 0)
            }
        }
    };
}

seaorm_set!(HiveSet, hive);
seaorm_set!(HiveSectionSet, hive_section);
seaorm_set!(ProductCategorySet, product_category);
seaorm_set!(ProductSet, product);

/// Entity sets backed by Postgres tables. Purging a parent cascades to its
/// children through the foreign keys.
#[derive(Clone)]
pub struct SeaOrmContext {
    hives: HiveSet,
    sections: HiveSectionSet,
    categories: ProductCategorySet,
    products: ProductSet,
}

impl SeaOrmContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            hives: HiveSet { db: db.clone() },
            sections: HiveSectionSet { db: db.clone() },
            categories: ProductCategorySet { db: db.clone() },
            products: ProductSet { db },
        }
    }
}

impl ProductStoreHiveContext for SeaOrmContext {
    fn hives(&self) -> &dyn EntitySet<hive::Model> { &self.hives }
    fn sections(&self) -> &dyn EntitySet<hive_section::Model> { &self.sections }
}

impl ProductStoreContext for SeaOrmContext {
    fn categories(&self) -> &dyn EntitySet<product_category::Model> { &self.categories }
    fn products(&self) -> &dyn EntitySet<product::Model> { &self.products }
}
