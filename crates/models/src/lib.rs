//! Storage entities for the hive and product catalogue domains.
pub mod errors;
pub mod db;
pub mod hive;
pub mod hive_section;
pub mod product_category;
pub mod product;

#[cfg(test)]
mod tests;
