use models::{product, product_category};

use super::dto::{
    Product, ProductCategory, ProductCategoryListItem, ProductCategoryProductListItem, ProductListItem,
    UpdateProductCategoryRequest, UpdateProductRequest,
};
use crate::mapping::{Apply, Mapping};

/// Field mappings for product categories and products.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductManagementProfile;

impl Mapping<product_category::Model, ProductCategoryListItem> for ProductManagementProfile {
    fn map(&self, c: &product_category::Model) -> ProductCategoryListItem {
        ProductCategoryListItem {
            id: c.id,
            name: c.name.clone(),
            code: c.code.clone(),
            is_deleted: c.is_deleted,
            product_count: 0,
        }
    }
}

impl Mapping<product_category::Model, ProductCategory> for ProductManagementProfile {
    fn map(&self, c: &product_category::Model) -> ProductCategory {
        ProductCategory {
            id: c.id,
            name: c.name.clone(),
            code: c.code.clone(),
            description: c.description.clone(),
            is_deleted: c.is_deleted,
            last_updated: c.last_updated,
        }
    }
}

impl Mapping<product::Model, ProductListItem> for ProductManagementProfile {
    fn map(&self, p: &product::Model) -> ProductListItem {
        ProductListItem {
            id: p.id,
            name: p.name.clone(),
            code: p.code.clone(),
            category_id: p.category_id,
            price: p.price,
            is_deleted: p.is_deleted,
        }
    }
}

impl Mapping<product::Model, ProductCategoryProductListItem> for ProductManagementProfile {
    fn map(&self, p: &product::Model) -> ProductCategoryProductListItem {
        ProductCategoryProductListItem {
            id: p.id,
            name: p.name.clone(),
            code: p.code.clone(),
            price: p.price,
            is_deleted: p.is_deleted,
        }
    }
}

impl Mapping<product::Model, Product> for ProductManagementProfile {
    fn map(&self, p: &product::Model) -> Product {
        Product {
            id: p.id,
            name: p.name.clone(),
            code: p.code.clone(),
            category_id: p.category_id,
            description: p.description.clone(),
            manufacturer_code: p.manufacturer_code.clone(),
            price: p.price,
            is_deleted: p.is_deleted,
            last_updated: p.last_updated,
        }
    }
}

impl Apply<UpdateProductCategoryRequest, product_category::Model> for ProductManagementProfile {
    fn apply(&self, req: &UpdateProductCategoryRequest, c: &mut product_category::Model) {
        c.name = req.name.clone();
        c.code = req.code.clone();
        c.description = req.description.clone();
    }
}

impl Apply<UpdateProductRequest, product::Model> for ProductManagementProfile {
    fn apply(&self, req: &UpdateProductRequest, p: &mut product::Model) {
        p.name = req.name.clone();
        p.code = req.code.clone();
        p.category_id = req.category_id;
        p.description = req.description.clone();
        p.manufacturer_code = req.manufacturer_code.clone();
        p.price = req.price;
    }
}
