//! Product categories and the product catalogue.

pub mod dto;
pub mod profile;
mod catalogue_service;
mod category_service;

pub use catalogue_service::ProductCatalogueService;
pub use category_service::ProductCategoryService;
pub use dto::{
    Product, ProductCategory, ProductCategoryListItem, ProductCategoryProductListItem, ProductListItem,
    UpdateProductCategoryRequest, UpdateProductRequest,
};
pub use profile::ProductManagementProfile;
