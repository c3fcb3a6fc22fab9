//! Steps shared by every service: code uniqueness, lookup, soft delete and purge.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::store::{EntitySet, StoreEntity};

pub(crate) fn now() -> DateTime<FixedOffset> {
    Utc::now().into()
}

/// Fails with Conflict when any row other than `except` already carries
/// `code`. Soft-deleted rows count; the comparison is case-sensitive.
pub(crate) fn ensure_code_free<E: StoreEntity>(
    rows: &[E],
    code: &str,
    except: Option<i32>,
) -> Result<(), ServiceError> {
    let taken = rows.iter().any(|r| r.code() == code && Some(r.id()) != except);
    if taken {
        warn!(entity = E::NAME, code = %code, "code_conflict");
        return Err(ServiceError::duplicate_code(E::NAME, code));
    }
    Ok(())
}

pub(crate) async fn find_existing<E: StoreEntity>(
    set: &dyn EntitySet<E>,
    id: i32,
) -> Result<E, ServiceError> {
    set.find(id).await?.ok_or_else(|| ServiceError::not_found(E::NAME, id))
}

pub(crate) async fn set_status<E: StoreEntity>(
    set: &dyn EntitySet<E>,
    id: i32,
    deleted: bool,
    user_id: i32,
) -> Result<(), ServiceError> {
    let mut row = find_existing(set, id).await?;
    row.set_deleted(deleted);
    row.touch(user_id, now());
    set.save(row).await?;
    debug!(entity = E::NAME, id, deleted, "status_changed");
    Ok(())
}

/// Hard delete; only rows already soft-deleted may be purged.
pub(crate) async fn purge<E: StoreEntity>(set: &dyn EntitySet<E>, id: i32) -> Result<(), ServiceError> {
    let row = find_existing(set, id).await?;
    if !row.is_deleted() {
        warn!(entity = E::NAME, id, "purge_of_active_row");
        return Err(ServiceError::Conflict(format!(
            "{} with id {} must be marked deleted before it can be purged",
            E::NAME,
            id
        )));
    }
    if !set.remove(id).await? {
        return Err(ServiceError::not_found(E::NAME, id));
    }
    debug!(entity = E::NAME, id, "purged");
    Ok(())
}
