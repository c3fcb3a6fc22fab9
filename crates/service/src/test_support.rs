#![cfg(test)]
//! Row builders and pre-wired services over a seeded in-memory store.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use models::{hive, hive_section, product, product_category};
use rust_decimal::Decimal;

use crate::context::{FixedUserContext, UserContext};
use crate::hive_management::{HiveSectionService, HiveService};
use crate::product_management::{ProductCatalogueService, ProductCategoryService};
use crate::store::InMemoryContext;

pub const USER_ID: i32 = 7;

pub fn stamp() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2018, 6, 1, 12, 0, 0).unwrap().into()
}

pub fn hive_row(id: i32, code: &str) -> hive::Model {
    hive::Model {
        id,
        name: format!("Hive {}", id),
        address: format!("Street {}", id),
        code: code.to_string(),
        is_deleted: false,
        created_by: 1,
        last_updated_by: 1,
        created: stamp(),
        last_updated: stamp(),
    }
}

pub fn section_row(id: i32, code: &str, hive_id: i32) -> hive_section::Model {
    hive_section::Model {
        id,
        name: format!("Section {}", id),
        code: code.to_string(),
        hive_id,
        is_deleted: false,
        created_by: 1,
        last_updated_by: 1,
        created: stamp(),
        last_updated: stamp(),
    }
}

pub fn category_row(id: i32, code: &str) -> product_category::Model {
    product_category::Model {
        id,
        name: format!("Category {}", id),
        code: code.to_string(),
        description: None,
        is_deleted: false,
        created_by: 1,
        last_updated_by: 1,
        created: stamp(),
        last_updated: stamp(),
    }
}

pub fn product_row(id: i32, code: &str, category_id: i32) -> product::Model {
    product::Model {
        id,
        name: format!("Product {}", id),
        code: code.to_string(),
        category_id,
        description: None,
        manufacturer_code: None,
        price: Decimal::new(1999, 2),
        is_deleted: false,
        created_by: 1,
        last_updated_by: 1,
        created: stamp(),
        last_updated: stamp(),
    }
}

pub struct HiveServices {
    pub hives: HiveService,
    pub sections: HiveSectionService,
}

pub struct ProductServices {
    pub categories: ProductCategoryService,
    pub products: ProductCatalogueService,
}

fn user() -> Arc<dyn UserContext> {
    Arc::new(FixedUserContext::new(USER_ID))
}

pub fn hive_store(
    hives: Vec<hive::Model>,
    sections: Vec<hive_section::Model>,
) -> (HiveServices, Arc<InMemoryContext>) {
    let store = Arc::new(InMemoryContext::new().with_hives(hives).with_sections(sections));
    let services = HiveServices {
        hives: HiveService::new(store.clone(), user()),
        sections: HiveSectionService::new(store.clone(), user()),
    };
    (services, store)
}

pub fn product_store(
    categories: Vec<product_category::Model>,
    products: Vec<product::Model>,
) -> (ProductServices, Arc<InMemoryContext>) {
    let store = Arc::new(InMemoryContext::new().with_categories(categories).with_products(products));
    let services = ProductServices {
        categories: ProductCategoryService::new(store.clone(), user()),
        products: ProductCatalogueService::new(store.clone(), user()),
    };
    (services, store)
}
