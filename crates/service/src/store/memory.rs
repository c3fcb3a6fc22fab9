use async_trait::async_trait;
use models::{hive, hive_section, product, product_category};
use tokio::sync::RwLock;

use super::{EntitySet, ProductStoreContext, ProductStoreHiveContext, StoreEntity};
use crate::errors::ServiceError;
use crate::protocol::ensure_code_free;

struct Rows<E> {
    rows: Vec<E>,
    /// Next id to hand out; only ever grows, so purged ids are never reused.
    next_id: i32,
}

impl<E: StoreEntity> Rows<E> {
    fn push(&mut self, mut entity: E) -> E {
        entity.set_id(self.next_id);
        self.next_id += 1;
        self.rows.push(entity.clone());
        entity
    }

    fn replace(&mut self, entity: E) -> Result<E, ServiceError> {
        let slot = self
            .rows
            .iter_mut()
            .find(|r| r.id() == entity.id())
            .ok_or_else(|| ServiceError::not_found(E::NAME, entity.id()))?;
        *slot = entity.clone();
        Ok(entity)
    }
}

/// In-process entity set. Ids start after the highest seeded id.
pub struct MemorySet<E> {
    inner: RwLock<Rows<E>>,
}

impl<E: StoreEntity> MemorySet<E> {
    pub fn new(mut rows: Vec<E>) -> Self {
        rows.sort_by_key(|r| r.id());
        let next_id = rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Self { inner: RwLock::new(Rows { rows, next_id }) }
    }
}

impl<E: StoreEntity> Default for MemorySet<E> {
    fn default() -> Self { Self::new(Vec::new()) }
}

#[async_trait]
impl<E: StoreEntity> EntitySet<E> for MemorySet<E> {
    async fn all(&self) -> Result<Vec<E>, ServiceError> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn find(&self, id: i32) -> Result<Option<E>, ServiceError> {
        Ok(self.inner.read().await.rows.iter().find(|r| r.id() == id).cloned())
    }

    async fn add(&self, entity: E) -> Result<E, ServiceError> {
        Ok(self.inner.write().await.push(entity))
    }

    async fn save(&self, entity: E) -> Result<E, ServiceError> {
        self.inner.write().await.replace(entity)
    }

    // The uniqueness check and the write share one lock guard.
    async fn add_unique(&self, entity: E) -> Result<E, ServiceError> {
        let mut inner = self.inner.write().await;
        ensure_code_free(&inner.rows, entity.code(), None)?;
        Ok(inner.push(entity))
    }

    async fn save_unique(&self, entity: E) -> Result<E, ServiceError> {
        let mut inner = self.inner.write().await;
        ensure_code_free(&inner.rows, entity.code(), Some(entity.id()))?;
        inner.replace(entity)
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        let before = inner.rows.len();
        inner.rows.retain(|r| r.id() != id);
        Ok(inner.rows.len() != before)
    }
}

/// All four entity sets held in memory. Purging a parent leaves its
/// children in place; their parent id is never reassigned.
#[derive(Default)]
pub struct InMemoryContext {
    hives: MemorySet<hive::Model>,
    sections: MemorySet<hive_section::Model>,
    categories: MemorySet<product_category::Model>,
    products: MemorySet<product::Model>,
}

impl InMemoryContext {
    pub fn new() -> Self { Self::default() }

    pub fn with_hives(mut self, rows: Vec<hive::Model>) -> Self {
        self.hives = MemorySet::new(rows);
        self
    }

    pub fn with_sections(mut self, rows: Vec<hive_section::Model>) -> Self {
        self.sections = MemorySet::new(rows);
        self
    }

    pub fn with_categories(mut self, rows: Vec<product_category::Model>) -> Self {
        self.categories = MemorySet::new(rows);
        self
    }

    pub fn with_products(mut self, rows: Vec<product::Model>) -> Self {
        self.products = MemorySet::new(rows);
        self
    }
}

impl ProductStoreHiveContext for InMemoryContext {
    fn hives(&self) -> &dyn EntitySet<hive::Model> { &self.hives }
    fn sections(&self) -> &dyn EntitySet<hive_section::Model> { &self.sections }
}

impl ProductStoreContext for InMemoryContext {
    fn categories(&self) -> &dyn EntitySet<product_category::Model> { &self.categories }
    fn products(&self) -> &dyn EntitySet<product::Model> { &self.products }
}
