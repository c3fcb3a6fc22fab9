use std::sync::Arc;

use models::product;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::dto::{Product, ProductCategoryProductListItem, ProductListItem, UpdateProductRequest};
use super::profile::ProductManagementProfile;
use crate::context::{ServiceDeps, UserContext};
use crate::errors::ServiceError;
use crate::mapping::{Apply, Mapping};
use crate::pagination::Window;
use crate::protocol::{self, find_existing};
use crate::store::ProductStoreContext;

/// Product catalogue. A product's category is not checked on write.
pub struct ProductCatalogueService {
    context: Arc<dyn ProductStoreContext>,
    user_context: Arc<dyn UserContext>,
    profile: ProductManagementProfile,
}

impl ProductCatalogueService {
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

    pub async fn list(&self, window: Window) -> Result<Vec<ProductListItem>, ServiceError> {
        let products = self.context.products().page(window).await?;
        Ok(products.iter().map(|p| self.profile.map(p)).collect())
    }

    /// Products of one category; NotFound when the category does not exist.
    pub async fn list_for_category(&self, category_id: i32) -> Result<Vec<ProductCategoryProductListItem>, ServiceError> {
        find_existing(self.context.categories(), category_id).await?;
        let products = self.context.products().all().await?;
        Ok(products
            .iter()
            .filter(|p| p.category_id == category_id)
            .map(|p| self.profile.map(p))
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<Product, ServiceError> {
        let row = find_existing(self.context.products(), id).await?;
        Ok(self.profile.map(&row))
    }

    #[instrument(skip(self, request), fields(code = %request.code, category_id = request.category_id))]
    pub async fn create(&self, request: &UpdateProductRequest) -> Result<Product, ServiceError> {
        let user_id = self.user_context.user_id();
        let now = protocol::now();
        let mut row = product::Model {
            id: 0,
            name: String::new(),
            code: String::new(),
            category_id: 0,
            description: None,
            manufacturer_code: None,
            price: Decimal::ZERO,
            is_deleted: false,
            created_by: user_id,
            last_updated_by: user_id,
            created: now,
            last_updated: now,
        };
        self.profile.apply(request, &mut row);
        let row = self.context.products().add_unique(row).await?;
        debug!(product_id = row.id, code = %row.code, "product_created");
        Ok(self.profile.map(&row))
    }

    #[instrument(skip(self, request), fields(code = %request.code, category_id = request.category_id))]
    pub async fn update(&self, id: i32, request: &UpdateProductRequest) -> Result<Product, ServiceError> {
        let mut row = find_existing(self.context.products(), id).await?;
        self.profile.apply(request, &mut row);
        row.last_updated_by = self.user_context.user_id();
        row.last_updated = protocol::now();
        let row = self.context.products().save_unique(row).await?;
        debug!(product_id = id, "product_updated");
        Ok(self.profile.map(&row))
    }

    pub async fn set_status(&self, id: i32, deleted: bool) -> Result<(), ServiceError> {
        protocol::set_status(self.context.products(), id, deleted, self.user_context.user_id()).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        protocol::purge(self.context.products(), id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FixedUserContext;
    use crate::test_support::{category_row, product_row, product_store, USER_ID};

    fn request(code: &str, category_id: i32) -> UpdateProductRequest {
        UpdateProductRequest {
            name: "Ball".into(),
            code: code.into(),
            category_id,
            description: Some("Leather".into()),
            manufacturer_code: Some("NK-01".into()),
            price: Decimal::new(4250, 2),
        }
    }

    #[test]
    fn from_deps_requires_context() {
        let deps = ServiceDeps::<dyn ProductStoreContext>::new()
            .user_context(Arc::new(FixedUserContext::new(USER_ID)));
        assert!(matches!(
            ProductCatalogueService::from_deps(deps),
            Err(ServiceError::MissingArgument("context"))
        ));
    }

    #[tokio::test]
    async fn list_applies_window() {
        let (svc, _) = product_store(vec![category_row(1, "C1")], (1..=4).map(|i| product_row(i, &format!("P{}", i), 1)).collect());
        let ids: Vec<i32> = svc.products.list(Window::new(2, 10)).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn list_for_category_filters_and_requires_category() {
        let (svc, _) = product_store(
            vec![category_row(1, "C1"), category_row(2, "C2")],
            vec![product_row(1, "P1", 1), product_row(2, "P2", 2)],
        );
        let items = svc.products.list_for_category(2).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code, "P2");
        assert!(matches!(svc.products.list_for_category(3).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_does_not_check_category() {
        let (svc, _) = product_store(vec![], vec![product_row(1, "P1", 1)]);
        let created = svc.products.create(&request("P2", 99)).await.unwrap();
        assert_eq!((created.id, created.category_id), (2, 99));
        assert_eq!(created.price, Decimal::new(4250, 2));
        assert_eq!(svc.products.get(2).await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_with_existing_code_conflicts() {
        let (svc, _) = product_store(vec![], vec![product_row(1, "P1", 1)]);
        assert!(matches!(svc.products.create(&request("P1", 1)).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let (svc, store) = product_store(vec![], vec![product_row(1, "P1", 1)]);
        let updated = svc.products.update(1, &request("P1", 2)).await.unwrap();
        assert_eq!(updated.manufacturer_code.as_deref(), Some("NK-01"));
        assert_eq!(updated.category_id, 2);
        let row = store.products().find(1).await.unwrap().unwrap();
        assert_eq!(row.last_updated_by, USER_ID);
        assert_eq!(row.created_by, 1);
    }

    #[tokio::test]
    async fn update_to_another_products_code_conflicts() {
        let (svc, _) = product_store(vec![], vec![product_row(1, "P1", 1), product_row(2, "P2", 1)]);
        assert!(matches!(svc.products.update(1, &request("P2", 1)).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn status_and_purge() {
        let (svc, _) = product_store(vec![], vec![product_row(1, "P1", 1)]);
        svc.products.set_status(1, true).await.unwrap();
        assert!(svc.products.get(1).await.unwrap().is_deleted);
        svc.products.delete(1).await.unwrap();
        assert!(matches!(svc.products.get(1).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.products.set_status(1, false).await, Err(ServiceError::NotFound(_))));
    }
}
