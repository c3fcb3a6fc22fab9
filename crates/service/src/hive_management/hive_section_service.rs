use std::sync::Arc;

use models::hive_section;
use tracing::{debug, instrument};

use super::dto::{HiveSection, HiveSectionListItem, UpdateHiveSectionRequest};
use super::profile::HiveManagementProfile;
use crate::context::{ServiceDeps, UserContext};
use crate::errors::ServiceError;
use crate::mapping::{Apply, Mapping};
use crate::protocol::{self, ensure_code_free, find_existing};
use crate::store::ProductStoreHiveContext;

/// Hive section CRUD. Sections must point at an existing hive.
pub struct HiveSectionService {
    context: Arc<dyn ProductStoreHiveContext>,
    user_context: Arc<dyn UserContext>,
    profile: HiveManagementProfile,
}

impl HiveSectionService {
    pub fn new(context: Arc<dyn ProductStoreHiveContext>, user_context: Arc<dyn UserContext>) -> Self {
        Self { context, user_context, profile: HiveManagementProfile }
    }

    pub fn from_deps(deps: ServiceDeps<dyn ProductStoreHiveContext>) -> Result<Self, ServiceError> {
        let (context, user_context) = deps.resolve()?;
        Ok(Self::new(context, user_context))
    }

    pub fn with_profile(mut self, profile: HiveManagementProfile) -> Self {
        self.profile = profile;
        self
    }

    pub async fn list(&self) -> Result<Vec<HiveSectionListItem>, ServiceError> {
        let sections = self.context.sections().all().await?;
        Ok(sections.iter().map(|s| self.profile.map(s)).collect())
    }

    /// Sections of one hive; NotFound when the hive does not exist.
    pub async fn list_for_hive(&self, hive_id: i32) -> Result<Vec<HiveSectionListItem>, ServiceError> {
        find_existing(self.context.hives(), hive_id).await?;
        let sections = self.context.sections().all().await?;
        Ok(sections
            .iter()
            .filter(|s| s.hive_id == hive_id)
            .map(|s| self.profile.map(s))
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<HiveSection, ServiceError> {
        let row = find_existing(self.context.sections(), id).await?;
        Ok(self.profile.map(&row))
    }

    #[instrument(skip(self, request), fields(code = %request.code, hive_id = request.hive_id))]
    pub async fn create(&self, request: &UpdateHiveSectionRequest) -> Result<HiveSection, ServiceError> {
        // early scan keeps Conflict ahead of a missing hive; add_unique re-checks atomically
        let sections = self.context.sections().all().await?;
        ensure_code_free(&sections, &request.code, None)?;
        find_existing(self.context.hives(), request.hive_id).await?;

        let user_id = self.user_context.user_id();
        let now = protocol::now();
        let mut row = hive_section::Model {
            id: 0,
            name: String::new(),
            code: String::new(),
            hive_id: 0,
            is_deleted: false,
            created_by: user_id,
            last_updated_by: user_id,
            created: now,
            last_updated: now,
        };
        self.profile.apply(request, &mut row);
        let row = self.context.sections().add_unique(row).await?;
        debug!(section_id = row.id, hive_id = row.hive_id, "hive_section_created");
        Ok(self.profile.map(&row))
    }

    #[instrument(skip(self, request), fields(code = %request.code, hive_id = request.hive_id))]
    pub async fn update(&self, id: i32, request: &UpdateHiveSectionRequest) -> Result<HiveSection, ServiceError> {
        let mut row = find_existing(self.context.sections(), id).await?;
        let sections = self.context.sections().all().await?;
        ensure_code_free(&sections, &request.code, Some(id))?;
        find_existing(self.context.hives(), request.hive_id).await?;

        self.profile.apply(request, &mut row);
        row.last_updated_by = self.user_context.user_id();
        row.last_updated = protocol::now();
        let row = self.context.sections().save_unique(row).await?;
        debug!(section_id = id, "hive_section_updated");
        Ok(self.profile.map(&row))
    }

    pub async fn set_status(&self, id: i32, deleted: bool) -> Result<(), ServiceError> {
        protocol::set_status(self.context.sections(), id, deleted, self.user_context.user_id()).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        protocol::purge(self.context.sections(), id).await
    }
}
