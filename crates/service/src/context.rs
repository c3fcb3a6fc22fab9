//! Identity of the caller on whose behalf writes are performed.

use std::sync::Arc;

use crate::errors::ServiceError;

/// Supplies the user id stamped into `created_by` / `last_updated_by`.
pub trait UserContext: Send + Sync {
    fn user_id(&self) -> i32;
}

/// A user context that always reports the same id.
#[derive(Clone, Copy, Debug)]
pub struct FixedUserContext {
    user_id: i32,
}

impl FixedUserContext {
    pub fn new(user_id: i32) -> Self { Self { user_id } }
}

impl UserContext for FixedUserContext {
    fn user_id(&self) -> i32 { self.user_id }
}

/// Collaborators a domain service is assembled from.
///
/// Both halves must be supplied; `resolve` reports the first one missing.
pub struct ServiceDeps<C: ?Sized> {
    context: Option<Arc<C>>,
    user_context: Option<Arc<dyn UserContext>>,
}

impl<C: ?Sized> Default for ServiceDeps<C> {
    fn default() -> Self { Self { context: None, user_context: None } }
}

impl<C: ?Sized> ServiceDeps<C> {
    pub fn new() -> Self { Self::default() }

    pub fn context(mut self, context: Arc<C>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn user_context(mut self, user_context: Arc<dyn UserContext>) -> Self {
        self.user_context = Some(user_context);
        self
    }

    pub(crate) fn resolve(self) -> Result<(Arc<C>, Arc<dyn UserContext>), ServiceError> {
        let context = self.context.ok_or(ServiceError::MissingArgument("context"))?;
        let user_context = self.user_context.ok_or(ServiceError::MissingArgument("user_context"))?;
        Ok((context, user_context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_reports_missing_context_first() {
        let deps: ServiceDeps<str> = ServiceDeps::new();
        assert!(matches!(deps.resolve(), Err(ServiceError::MissingArgument("context"))));
    }

    #[test]
    fn resolve_reports_missing_user_context() {
        let deps: ServiceDeps<str> = ServiceDeps::new().context(Arc::from("store"));
        assert!(matches!(deps.resolve(), Err(ServiceError::MissingArgument("user_context"))));
    }

    #[test]
    fn resolve_returns_both_collaborators() {
        let deps: ServiceDeps<str> = ServiceDeps::new()
            .context(Arc::from("store"))
            .user_context(Arc::new(FixedUserContext::new(3)));
        let (context, user) = deps.resolve().unwrap();
        assert_eq!(&*context, "store");
        assert_eq!(user.user_id(), 3);
    }
}
