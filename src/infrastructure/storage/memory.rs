//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepository};

/// In-memory user storage for development and testing
pub struct InMemoryUserRepository {
    users: DashMap<i32, User>,
    id_counter: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|e| e.value().clone()))
    }

    async fn add(&self, user: NewUser) -> DomainResult<User> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let user = User::with_id(id, user);
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        match self.users.get_mut(&user.id) {
            Some(mut entry) => {
                *entry = user.clone();
                Ok(user)
            }
            None => Err(DomainError::user_not_found(user.id)),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            phone_number: None,
            birth_date: NaiveDate::from_ymd_opt(2000, 2, 29).unwrap(),
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let repo = InMemoryUserRepository::new();

        let a = repo.add(new_user("a")).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.add(new_user("b")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.list_all().await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn update_and_delete_missing_are_not_found() {
        let repo = InMemoryUserRepository::new();

        assert!(matches!(
            repo.update(User::with_id(3, new_user("x"))).await,
            Err(DomainError::NotFound { id: 3, .. })
        ));
        assert!(matches!(
            repo.delete(3).await,
            Err(DomainError::NotFound { id: 3, .. })
        ));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let repo = InMemoryUserRepository::new();
        for name in ["c", "a", "b"] {
            repo.add(new_user(name)).await.unwrap();
        }

        let ids: Vec<i32> = repo.list_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
