use std::sync::Arc;

use models::hive;
use tracing::{debug, instrument};

use super::dto::{Hive, HiveListItem, UpdateHiveRequest};
use super::profile::HiveManagementProfile;
use crate::context::{ServiceDeps, UserContext};
use crate::errors::ServiceError;
use crate::mapping::{Apply, Mapping};
use crate::protocol::{self, find_existing};
use crate::store::ProductStoreHiveContext;

/// Hive CRUD with soft delete and purge.
pub struct HiveService {
    context: Arc<dyn ProductStoreHiveContext>,
    user_context: Arc<dyn UserContext>,
    profile: HiveManagementProfile,
}

impl HiveService {
    pub fn new(context: Arc<dyn ProductStoreHiveContext>, user_context: Arc<dyn UserContext>) -> Self {
        Self { context, user_context, profile: HiveManagementProfile }
    }

    /// Fails with `MissingArgument` when either collaborator was not supplied.
    pub fn from_deps(deps: ServiceDeps<dyn ProductStoreHiveContext>) -> Result<Self, ServiceError> {
        let (context, user_context) = deps.resolve()?;
        Ok(Self::new(context, user_context))
    }

    pub fn with_profile(mut self, profile: HiveManagementProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Every hive, deleted ones included, with its section count.
    pub async fn list(&self) -> Result<Vec<HiveListItem>, ServiceError> {
        let hives = self.context.hives().all().await?;
        let sections = self.context.sections().all().await?;
        Ok(hives
            .iter()
            .map(|h| {
                let mut item: HiveListItem = self.profile.map(h);
                item.hive_section_count = sections.iter().filter(|s| s.hive_id == h.id).count();
                item
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<Hive, ServiceError> {
        let row = find_existing(self.context.hives(), id).await?;
        Ok(self.profile.map(&row))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create(&self, request: &UpdateHiveRequest) -> Result<Hive, ServiceError> {
        let user_id = self.user_context.user_id();
        let now = protocol::now();
        let mut row = hive::Model {
            id: 0,
            name: String::new(),
            address: String::new(),
            code: String::new(),
            is_deleted: false,
            created_by: user_id,
            last_updated_by: user_id,
            created: now,
            last_updated: now,
        };
        self.profile.apply(request, &mut row);
        let row = self.context.hives().add_unique(row).await?;
        debug!(hive_id = row.id, code = %row.code, "hive_created");
        Ok(self.profile.map(&row))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn update(&self, id: i32, request: &UpdateHiveRequest) -> Result<Hive, ServiceError> {
        let mut row = find_existing(self.context.hives(), id).await?;
        self.profile.apply(request, &mut row);
        row.last_updated_by = self.user_context.user_id();
        row.last_updated = protocol::now();
        let row = self.context.hives().save_unique(row).await?;
        debug!(hive_id = id, "hive_updated");
        Ok(self.profile.map(&row))
    }

    pub async fn set_status(&self, id: i32, deleted: bool) -> Result<(), ServiceError> {
        protocol::set_status(self.context.hives(), id, deleted, self.user_context.user_id()).await
    }

    /// Purge a hive previously marked deleted.
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        protocol::purge(self.context.hives(), id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FixedUserContext;
    use crate::store::InMemoryContext;
    use crate::test_support::{hive_row, hive_store, section_row, USER_ID};

    fn request(name: &str, code: &str, address: &str) -> UpdateHiveRequest {
        UpdateHiveRequest { name: name.into(), code: code.into(), address: address.into() }
    }

    #[test]
    fn from_deps_requires_context() {
        let deps = ServiceDeps::<dyn ProductStoreHiveContext>::new()
            .user_context(Arc::new(FixedUserContext::new(USER_ID)));
        assert!(matches!(HiveService::from_deps(deps), Err(ServiceError::MissingArgument("context"))));
    }

    #[test]
    fn from_deps_requires_user_context() {
        let context: Arc<dyn ProductStoreHiveContext> = Arc::new(InMemoryContext::new());
        let deps = ServiceDeps::new().context(context);
        assert!(matches!(HiveService::from_deps(deps), Err(ServiceError::MissingArgument("user_context"))));
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let (svc, _) = hive_store(vec![], vec![]);
        assert!(svc.hives.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_includes_deleted_hives_and_counts_sections() {
        let mut deleted = hive_row(2, "B");
        deleted.is_deleted = true;
        let (svc, _) = hive_store(
            vec![hive_row(1, "A"), deleted],
            vec![section_row(1, "S1", 1), section_row(2, "S2", 1), section_row(3, "S3", 2)],
        );
        let list = svc.hives.list().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!((list[0].id, list[0].hive_section_count), (1, 2));
        assert_eq!((list[1].id, list[1].hive_section_count, list[1].is_deleted), (2, 1, true));
    }

    #[tokio::test]
    async fn get_missing_hive_is_not_found() {
        let (svc, _) = hive_store(vec![hive_row(1, "A")], vec![]);
        assert!(matches!(svc.hives.get(2).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_with_existing_code_conflicts() {
        let (svc, store) = hive_store(vec![hive_row(1, "A"), hive_row(2, "B"), hive_row(3, "C")], vec![]);
        let err = svc.hives.create(&request("qwerty", "A", "Kuprevicha 1-1")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(store.hives().all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_round_trips() {
        let (svc, _) = hive_store(vec![hive_row(1, "A"), hive_row(2, "B"), hive_row(3, "C")], vec![]);
        let created = svc.hives.create(&request("qwerty", "D", "Kuprevicha 1-1")).await.unwrap();
        assert_eq!(created.id, 4);
        assert!(!created.is_deleted);

        let fetched = svc.hives.get(4).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "qwerty");
        assert_eq!(fetched.code, "D");
        assert_eq!(fetched.address, "Kuprevicha 1-1");
    }

    #[tokio::test]
    async fn create_stamps_user_context() {
        let (svc, store) = hive_store(vec![], vec![]);
        let created = svc.hives.create(&request("n", "A", "addr")).await.unwrap();
        let row = store.hives().find(created.id).await.unwrap().unwrap();
        assert_eq!((row.created_by, row.last_updated_by), (USER_ID, USER_ID));
    }

    #[tokio::test]
    async fn update_missing_hive_is_not_found() {
        let (svc, _) = hive_store(vec![hive_row(1, "A")], vec![]);
        let err = svc.hives.update(5, &request("n", "Z", "addr")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_to_another_hives_code_conflicts() {
        let (svc, _) = hive_store(vec![hive_row(1, "A"), hive_row(2, "B")], vec![]);
        let err = svc.hives.update(1, &request("n", "B", "addr")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_keeping_own_code_succeeds() {
        let (svc, _) = hive_store(vec![hive_row(1, "A"), hive_row(2, "B")], vec![]);
        let updated = svc.hives.update(1, &request("renamed", "A", "new address")).await.unwrap();
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.address, "new address");
        assert_eq!(svc.hives.get(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn set_status_round_trip() {
        let (svc, _) = hive_store(vec![hive_row(1, "A")], vec![]);
        svc.hives.set_status(1, true).await.unwrap();
        assert!(svc.hives.get(1).await.unwrap().is_deleted);
        svc.hives.set_status(1, false).await.unwrap();
        assert!(!svc.hives.get(1).await.unwrap().is_deleted);
    }

    #[tokio::test]
    async fn set_status_missing_hive_is_not_found() {
        let (svc, _) = hive_store(vec![], vec![]);
        assert!(matches!(svc.hives.set_status(1, true).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_active_hive_conflicts() {
        let (svc, store) = hive_store(vec![hive_row(1, "A")], vec![]);
        assert!(matches!(svc.hives.delete(1).await, Err(ServiceError::Conflict(_))));
        assert!(store.hives().find(1).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_soft_deleted_hive_removes_it() {
        let mut deleted = hive_row(1, "A");
        deleted.is_deleted = true;
        let (svc, store) = hive_store(vec![deleted, hive_row(2, "B")], vec![section_row(1, "S1", 1)]);
        svc.hives.delete(1).await.unwrap();
        assert!(store.hives().find(1).await.unwrap().is_none());
        assert!(matches!(svc.hives.get(1).await, Err(ServiceError::NotFound(_))));
        // sections are not cascaded in memory
        assert_eq!(store.sections().all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn hive_created_after_purge_does_not_inherit_sections() {
        let mut deleted = hive_row(2, "B");
        deleted.is_deleted = true;
        let (svc, _) = hive_store(vec![hive_row(1, "A"), deleted], vec![section_row(1, "S1", 2)]);
        svc.hives.delete(2).await.unwrap();

        let created = svc.hives.create(&request("new", "N", "addr")).await.unwrap();
        assert_eq!(created.id, 3);
        assert!(svc.sections.list_for_hive(created.id).await.unwrap().is_empty());

        let counts: Vec<(i32, usize)> =
            svc.hives.list().await.unwrap().iter().map(|h| (h.id, h.hive_section_count)).collect();
        assert_eq!(counts, vec![(1, 0), (3, 0)]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_creates_with_same_code_admit_one() {
        let (svc, store) = hive_store(vec![], vec![]);
        let first = request("one", "X", "addr");
        let second = request("two", "X", "addr");
        let (a, b) = tokio::join!(svc.hives.create(&first), svc.hives.create(&second));
        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert!(matches!(a.err().or(b.err()), Some(ServiceError::Conflict(_))));
        assert_eq!(store.hives().all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_hive_is_not_found() {
        let (svc, _) = hive_store(vec![], vec![]);
        assert!(matches!(svc.hives.delete(1).await, Err(ServiceError::NotFound(_))));
    }
}
