use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact, case-sensitive lookup by `userName`
    async fn find_by_user_name(&self, user_name: &str) -> UserResult<Option<User>>;

    /// Insert a new user.
    ///
    /// Fails with [`UserError::UsernameTaken`] when another user already owns
    /// the name, even if a preceding lookup saw none.
    async fn create(&self, user: User) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Keyed by `userName`; the check and the insert happen under one write lock,
/// which gives the same insert-if-absent behavior as the unique index.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_user_name(&self, user_name: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(user_name).cloned())
    }

    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.user_name) {
            return Err(UserError::UsernameTaken(user.user_name));
        }

        users.insert(user.user_name.clone(), user.clone());

        tracing::info!(user_id = %user.id, user_name = %user.user_name, "Created user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(
            name.to_string(),
            "hashed_password".to_string(),
            format!("{}@example.com", name),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(user("carl")).await.unwrap();
        let fetched = repo.find_by_user_name("carl").await.unwrap();

        assert_eq!(fetched.map(|u| u.id), Some(created.id));
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("carl")).await.unwrap();

        assert!(repo.find_by_user_name("Carl").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_user_name_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("carl")).await.unwrap();

        let result = repo.create(user("carl")).await;

        assert!(matches!(result, Err(UserError::UsernameTaken(name)) if name == "carl"));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_admit_exactly_one() {
        let repo = InMemoryUserRepository::new();

        let attempts: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(user("race")).await })
            })
            .collect();
        let mut created = 0;
        for handle in attempts {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.len().await, 1);
    }
}
