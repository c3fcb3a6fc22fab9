//! Entity store abstraction.
//!
//! Services only see the [`EntitySet`] collections exposed by a context;
//! `memory` keeps them in process, `seaorm` maps them onto Postgres tables.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use models::{hive, hive_section, product, product_category};

use crate::errors::ServiceError;
use crate::pagination::Window;
use crate::protocol::ensure_code_free;

pub mod memory;
pub mod seaorm;

pub use memory::{InMemoryContext, MemorySet};
pub use seaorm::SeaOrmContext;

/// Columns shared by every soft-deletable, code-identified row.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Human readable entity name used in error messages.
    const NAME: &'static str;

    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
    fn code(&self) -> &str;
    fn is_deleted(&self) -> bool;
    fn set_deleted(&mut self, deleted: bool);
    /// Stamp the audit columns of a modified row.
    fn touch(&mut self, user_id: i32, at: DateTime<FixedOffset>);
}

macro_rules! store_entity {
    ($model:ty, $name:literal) => {
        impl StoreEntity for $model {
            const NAME: &'static str = $name;

            fn id(&self) -> i32 { self.id }
            fn set_id(&mut self, id: i32) { self.id = id; }
            fn code(&self) -> &str { &self.code }
            fn is_deleted(&self) -> bool { self.is_deleted }
            fn set_deleted(&mut self, deleted: bool) { self.is_deleted = deleted; }
            fn touch(&mut self, user_id: i32, at: DateTime<FixedOffset>) {
                self.last_updated_by = user_id;
                self.last_updated = at;
            }
        }
    };
}

store_entity!(hive::Model, "hive");
store_entity!(hive_section::Model, "hive section");
store_entity!(product_category::Model, "product category");
store_entity!(product::Model, "product");

/// A mutable collection of one entity type, ordered by id.
#[async_trait]
pub trait EntitySet<E: StoreEntity>: Send + Sync {
    async fn all(&self) -> Result<Vec<E>, ServiceError>;

    async fn page(&self, window: Window) -> Result<Vec<E>, ServiceError> {
        Ok(window.apply(self.all().await?))
    }

    async fn find(&self, id: i32) -> Result<Option<E>, ServiceError>;

    /// Store a new row; the store assigns its id.
    async fn add(&self, entity: E) -> Result<E, ServiceError>;

    async fn save(&self, entity: E) -> Result<E, ServiceError>;

    /// [`add`](Self::add) unless another row already carries the code.
    async fn add_unique(&self, entity: E) -> Result<E, ServiceError> {
        ensure_code_free(&self.all().await?, entity.code(), None)?;
        self.add(entity).await
    }

    /// [`save`](Self::save) unless a different row already carries the code.
    async fn save_unique(&self, entity: E) -> Result<E, ServiceError> {
        ensure_code_free(&self.all().await?, entity.code(), Some(entity.id()))?;
        self.save(entity).await
    }

    /// Remove a row, returning whether it existed.
    async fn remove(&self, id: i32) -> Result<bool, ServiceError>;
}

pub trait ProductStoreHiveContext: Send + Sync {
    fn hives(&self) -> &dyn EntitySet<hive::Model>;
    fn sections(&self) -> &dyn EntitySet<hive_section::Model>;
}

pub trait ProductStoreContext: Send + Sync {
    fn categories(&self) -> &dyn EntitySet<product_category::Model>;
    fn products(&self) -> &dyn EntitySet<product::Model>;
}
