//! Hives and the sections they are divided into.

pub mod dto;
pub mod profile;
mod hive_service;
mod hive_section_service;

pub use dto::{Hive, HiveListItem, HiveSection, HiveSectionListItem, UpdateHiveRequest, UpdateHiveSectionRequest};
pub use hive_section_service::HiveSectionService;
pub use hive_service::HiveService;
pub use profile::HiveManagementProfile;
