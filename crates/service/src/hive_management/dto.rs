use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationResult, ADDRESS_MAX, CODE_MAX, NAME_MAX};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveListItem {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub is_deleted: bool,
    pub hive_section_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hive {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub code: String,
    pub is_deleted: bool,
    pub last_updated: DateTime<FixedOffset>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveSectionListItem {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub is_deleted: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveSection {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub hive_id: i32,
    pub is_deleted: bool,
    pub last_updated: DateTime<FixedOffset>,
}

/// Body of hive create and update requests. Missing fields default to empty
/// and are reported by validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateHiveRequest {
    pub name: String,
    pub address: String,
    pub code: String,
}

impl Validate for UpdateHiveRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        result
            .required("name", &self.name, NAME_MAX)
            .required("address", &self.address, ADDRESS_MAX)
            .required("code", &self.code, CODE_MAX);
        result
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateHiveSectionRequest {
    pub name: String,
    pub code: String,
    pub hive_id: i32,
}

impl Validate for UpdateHiveSectionRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        result
            .required("name", &self.name, NAME_MAX)
            .required("code", &self.code, CODE_MAX)
            .positive("hiveId", self.hive_id);
        result
    }
}
