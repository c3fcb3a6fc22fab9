use std::sync::Arc;

use service::context::{FixedUserContext, UserContext};
use service::hive_management::{HiveSectionService, HiveService};
use service::product_management::{ProductCatalogueService, ProductCategoryService};
use service::store::{InMemoryContext, ProductStoreContext, ProductStoreHiveContext};

/// Services shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub hives: Arc<HiveService>,
    pub sections: Arc<HiveSectionService>,
    pub categories: Arc<ProductCategoryService>,
    pub products: Arc<ProductCatalogueService>,
}

impl AppState {
    /// Wire all four services to one store.
    pub fn new<C>(store: Arc<C>, user_context: Arc<dyn UserContext>) -> Self
    where
        C: ProductStoreHiveContext + ProductStoreContext + 'static,
    {
        Self {
            hives: Arc::new(HiveService::new(store.clone(), user_context.clone())),
            sections: Arc::new(HiveSectionService::new(store.clone(), user_context.clone())),
            categories: Arc::new(ProductCategoryService::new(store.clone(), user_context.clone())),
            products: Arc::new(ProductCatalogueService::new(store, user_context)),
        }
    }

    /// Empty in-process store, used by the `memory` backend and tests.
    pub fn in_memory(user_id: i32) -> Self {
        Self::new(Arc::new(InMemoryContext::new()), Arc::new(FixedUserContext::new(user_id)))
    }
}
