use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{
    Validate, ValidationResult, CODE_MAX, DESCRIPTION_MAX, MANUFACTURER_CODE_MAX, NAME_MAX,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryListItem {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub is_deleted: bool,
    pub product_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_deleted: bool,
    pub last_updated: DateTime<FixedOffset>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItem {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub category_id: i32,
    pub price: Decimal,
    pub is_deleted: bool,
}

/// Product as listed under its category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryProductListItem {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub price: Decimal,
    pub is_deleted: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub manufacturer_code: Option<String>,
    pub price: Decimal,
    pub is_deleted: bool,
    pub last_updated: DateTime<FixedOffset>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductCategoryRequest {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

impl Validate for UpdateProductCategoryRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        result
            .required("name", &self.name, NAME_MAX)
            .required("code", &self.code, CODE_MAX)
            .optional("description", self.description.as_deref(), DESCRIPTION_MAX);
        result
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductRequest {
    pub name: String,
    pub code: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub manufacturer_code: Option<String>,
    pub price: Decimal,
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        result
            .required("name", &self.name, NAME_MAX)
            .required("code", &self.code, CODE_MAX)
            .positive("categoryId", self.category_id)
            .optional("description", self.description.as_deref(), DESCRIPTION_MAX)
            .optional("manufacturerCode", self.manufacturer_code.as_deref(), MANUFACTURER_CODE_MAX)
            .check("price", self.price >= Decimal::ZERO, "must not be negative");
        result
    }
}
