use async_trait::async_trait;

use super::{NewUser, User};
use crate::domain::DomainResult;

/// Data access for the user table.
///
/// No business rules live here. Callers check existence with
/// [`get_by_id`](Self::get_by_id) before `update` / `delete`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<User>>;

    /// `Ok(None)` when no user has this id.
    async fn get_by_id(&self, id: i32) -> DomainResult<Option<User>>;

    /// Persist a new user; the returned value carries the assigned id.
    async fn add(&self, user: NewUser) -> DomainResult<User>;

    /// Overwrite every non-id field of the record identified by `user.id`.
    async fn update(&self, user: User) -> DomainResult<User>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
