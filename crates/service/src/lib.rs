//! Service layer providing the hive and product catalogue operations on top of models.
//! - Services talk to an entity store through the `store` context traits.
//! - Storage rows are converted to transfer objects by explicit mapping profiles.
//! - Failures are reported as `ServiceError` values, never panics.

pub mod errors;
pub mod context;
pub mod mapping;
pub mod pagination;
pub mod validation;
pub mod store;
mod protocol;
pub mod hive_management;
pub mod product_management;
#[cfg(test)]
pub mod test_support;
