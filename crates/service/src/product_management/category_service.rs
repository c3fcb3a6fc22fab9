use std::sync::Arc;

use models::product_category;
use tracing::{debug, instrument};

use super::dto::{ProductCategory, ProductCategoryListItem, UpdateProductCategoryRequest};
use super::profile::ProductManagementProfile;
use crate::context::{ServiceDeps, UserContext};
use crate::errors::ServiceError;
use crate::mapping::{Apply, Mapping};
use crate::pagination::Window;
use crate::protocol::{self, find_existing};
use crate::store::ProductStoreContext;

pub struct ProductCategoryService {
    context: Arc<dyn ProductStoreContext>,
    user_context: Arc<dyn UserContext>,
    profile: ProductManagementProfile,
}

impl ProductCategoryService {
    pub fn new(context: Arc<dyn ProductStoreContext>, user_context: Arc<dyn UserContext>) -> Self {
        Self { context, user_context, profile: ProductManagementProfile }
    }

    pub fn from_deps(deps: ServiceDeps<dyn ProductStoreContext>) -> Result<Self, ServiceError> {
        let (context, user_context) = deps.resolve()?;
        Ok(Self::new(context, user_context))
    }

    pub fn with_profile(mut self, profile: ProductManagementProfile) -> Self {
        self.profile = profile;
        self
    }

    /// A window of categories ordered by id, each with its product count.
    pub async fn list(&self, window: Window) -> Result<Vec<ProductCategoryListItem>, ServiceError> {
        let categories = self.context.categories().page(window).await?;
        let products = self.context.products().all().await?;
        Ok(categories
            .iter()
            .map(|c| {
                let mut item: ProductCategoryListItem = self.profile.map(c);
                item.product_count = products.iter().filter(|p| p.category_id == c.id).count();
                item
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<ProductCategory, ServiceError> {
        let row = find_existing(self.context.categories(), id).await?;
        Ok(self.profile.map(&row))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create(&self, request: &UpdateProductCategoryRequest) -> Result<ProductCategory, ServiceError> {
        let user_id = self.user_context.user_id();
        let now = protocol::now();
        let mut row = product_category::Model {
            id: 0,
            name: String::new(),
            code: String::new(),
            description: None,
            is_deleted: false,
            created_by: user_id,
            last_updated_by: user_id,
            created: now,
            last_updated: now,
        };
        self.profile.apply(request, &mut row);
        let row = self.context.categories().add_unique(row).await?;
        debug!(category_id = row.id, code = %row.code, "product_category_created");
        Ok(self.profile.map(&row))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn update(&self, id: i32, request: &UpdateProductCategoryRequest) -> Result<ProductCategory, ServiceError> {
        let mut row = find_existing(self.context.categories(), id).await?;
        self.profile.apply(request, &mut row);
        row.last_updated_by = self.user_context.user_id();
        row.last_updated = protocol::now();
        let row = self.context.categories().save_unique(row).await?;
        debug!(category_id = id, "product_category_updated");
        Ok(self.profile.map(&row))
    }

    pub async fn set_status(&self, id: i32, deleted: bool) -> Result<(), ServiceError> {
        protocol::set_status(self.context.categories(), id, deleted, self.user_context.user_id()).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        protocol::purge(self.context.categories(), id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryContext;
    use crate::test_support::{category_row, product_row, product_store};

    fn request(code: &str) -> UpdateProductCategoryRequest {
        UpdateProductCategoryRequest { name: "Balls".into(), code: code.into(), description: Some("Round".into()) }
    }

    #[test]
    fn from_deps_requires_user_context() {
        let context: Arc<dyn ProductStoreContext> = Arc::new(InMemoryContext::new());
        let deps = ServiceDeps::new().context(context);
        assert!(matches!(
            ProductCategoryService::from_deps(deps),
            Err(ServiceError::MissingArgument("user_context"))
        ));
    }

    #[tokio::test]
    async fn list_windows_by_id_and_counts_products() {
        let (svc, _) = product_store(
            (1..=5).map(|i| category_row(i, &format!("C{}", i))).collect(),
            vec![product_row(1, "P1", 2), product_row(2, "P2", 2), product_row(3, "P3", 3)],
        );
        let list = svc.categories.list(Window::new(1, 2)).await.unwrap();
        let summary: Vec<(i32, usize)> = list.iter().map(|c| (c.id, c.product_count)).collect();
        assert_eq!(summary, vec![(2, 2), (3, 1)]);
        assert!(svc.categories.list(Window::new(10, 5)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_keeps_description() {
        let (svc, _) = product_store(vec![category_row(1, "C1")], vec![]);
        let created = svc.categories.create(&request("C2")).await.unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(created.description.as_deref(), Some("Round"));
        assert_eq!(svc.categories.get(2).await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_with_existing_code_conflicts() {
        let (svc, _) = product_store(vec![category_row(1, "C1")], vec![]);
        assert!(matches!(svc.categories.create(&request("C1")).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn update_keeping_own_code_succeeds() {
        let (svc, _) = product_store(vec![category_row(1, "C1")], vec![]);
        let updated = svc.categories.update(1, &request("C1")).await.unwrap();
        assert_eq!(updated.name, "Balls");
    }

    #[tokio::test]
    async fn update_missing_category_is_not_found() {
        let (svc, _) = product_store(vec![], vec![]);
        assert!(matches!(svc.categories.update(1, &request("C1")).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn purge_requires_soft_delete() {
        let (svc, store) = product_store(vec![category_row(1, "C1")], vec![]);
        assert!(matches!(svc.categories.delete(1).await, Err(ServiceError::Conflict(_))));
        svc.categories.set_status(1, true).await.unwrap();
        svc.categories.delete(1).await.unwrap();
        assert!(store.categories().all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn category_created_after_purge_has_no_products() {
        let mut deleted = category_row(2, "C2");
        deleted.is_deleted = true;
        let (svc, _) = product_store(vec![category_row(1, "C1"), deleted], vec![product_row(1, "P1", 2)]);
        svc.categories.delete(2).await.unwrap();

        let created = svc.categories.create(&request("C3")).await.unwrap();
        assert_eq!(created.id, 3);
        let counts: Vec<(i32, usize)> = svc
            .categories
            .list(Window::default())
            .await
            .unwrap()
            .iter()
            .map(|c| (c.id, c.product_count))
            .collect();
        assert_eq!(counts, vec![(1, 0), (3, 0)]);
    }
}
