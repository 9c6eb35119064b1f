//! Test utilities for the user service.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`, via
//! the `test-support` feature). Only compiled for those builds.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

#[derive(Default)]
struct MemoryState {
    users: Vec<User>,
    last_id: i32,
    failure: Option<UserPersistenceError>,
}

/// In-memory `UserRepository` that mirrors the store's constraints.
///
/// Ids come from an increasing counter that is never rewound, and duplicate
/// names or emails are rejected with the same constraint names PostgreSQL
/// reports (`users_name_key`, `users_email_key`).
///
/// # Examples
/// ```
/// use user_service::domain::NewUser;
/// use user_service::domain::ports::UserRepository;
/// use user_service::test_support::MemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = MemoryUserRepository::default();
/// let user = repo.insert(&NewUser::new("alice", "alice@example.com", 30)).await.unwrap();
/// assert_eq!(user.id().get(), 1);
/// # });
/// ```
#[derive(Default)]
pub struct MemoryUserRepository {
    state: Mutex<MemoryState>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `failure` until [`Self::recover`].
    pub fn fail_with(&self, failure: UserPersistenceError) {
        self.lock().failure = Some(failure);
    }

    /// Clear a failure injected with [`Self::fail_with`].
    pub fn recover(&self) {
        self.lock().failure = None;
    }

    /// Snapshot of the stored users.
    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock();
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        Ok(state.users.clone())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.lock();
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        if state.users.iter().any(|existing| existing.name() == user.name) {
            return Err(UserPersistenceError::unique_violation("users_name_key"));
        }
        if state.users.iter().any(|existing| existing.email() == user.email) {
            return Err(UserPersistenceError::unique_violation("users_email_key"));
        }

        state.last_id += 1;
        let created = User::from_new(UserId::new(state.last_id), user.clone());
        state.users.push(created.clone());
        Ok(created)
    }
}
