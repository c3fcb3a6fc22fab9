use models::{hive, hive_section};

use super::dto::{Hive, HiveListItem, HiveSection, HiveSectionListItem, UpdateHiveRequest, UpdateHiveSectionRequest};
use crate::mapping::{Apply, Mapping};

/// Field mappings for hives and hive sections.
#[derive(Clone, Copy, Debug, Default)]
pub struct HiveManagementProfile;

impl Mapping<hive::Model, HiveListItem> for HiveManagementProfile {
    fn map(&self, h: &hive::Model) -> HiveListItem {
        HiveListItem {
            id: h.id,
            name: h.name.clone(),
            code: h.code.clone(),
            is_deleted: h.is_deleted,
            hive_section_count: 0,
        }
    }
}

impl Mapping<hive::Model, Hive> for HiveManagementProfile {
    fn map(&self, h: &hive::Model) -> Hive {
        Hive {
            id: h.id,
            name: h.name.clone(),
            address: h.address.clone(),
            code: h.code.clone(),
            is_deleted: h.is_deleted,
            last_updated: h.last_updated,
        }
    }
}

impl Mapping<hive_section::Model, HiveSectionListItem> for HiveManagementProfile {
    fn map(&self, s: &hive_section::Model) -> HiveSectionListItem {
        HiveSectionListItem { id: s.id, name: s.name.clone(), code: s.code.clone(), is_deleted: s.is_deleted }
    }
}

impl Mapping<hive_section::Model, HiveSection> for HiveManagementProfile {
    fn map(&self, s: &hive_section::Model) -> HiveSection {
        HiveSection {
            id: s.id,
            name: s.name.clone(),
            code: s.code.clone(),
            hive_id: s.hive_id,
            is_deleted: s.is_deleted,
            last_updated: s.last_updated,
        }
    }
}

impl Apply<UpdateHiveRequest, hive::Model> for HiveManagementProfile {
    fn apply(&self, req: &UpdateHiveRequest, h: &mut hive::Model) {
        h.name = req.name.clone();
        h.address = req.address.clone();
        h.code = req.code.clone();
    }
}

impl Apply<UpdateHiveSectionRequest, hive_section::Model> for HiveManagementProfile {
    fn apply(&self, req: &UpdateHiveSectionRequest, s: &mut hive_section::Model) {
        s.name = req.name.clone();
        s.code = req.code.clone();
        s.hive_id = req.hive_id;
    }
}
