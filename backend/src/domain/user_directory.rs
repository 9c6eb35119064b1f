//! User directory use-cases: list every user and register new ones.
//!
//! [`UserDirectoryService`] implements both driving ports on top of a
//! [`UserRepository`]. It owns the mapping from persistence failures to
//! domain errors and logs the underlying cause, since the HTTP adapter only
//! ever shows clients a redacted message.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::ports::{UserPersistenceError, UserRegistration, UserRepository, UsersQuery};
use crate::domain::{Error, NewUser, User};

/// Message returned when the store cannot be reached.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "database unavailable";

/// Domain service backing the users query and registration ports.
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            error!(%message, "user store unavailable");
            Error::service_unavailable(STORE_UNAVAILABLE_MESSAGE)
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user store query failed");
            Error::internal(message)
        }
        UserPersistenceError::UniqueViolation { constraint } => {
            warn!(%constraint, "user rejected by uniqueness constraint");
            Error::internal("user already exists").with_details(json!({ "constraint": constraint }))
        }
    }
}

#[async_trait]
impl UsersQuery for UserDirectoryService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .list_all()
            .await
            .map_err(map_persistence_error)?;
        debug!(user_count = users.len(), "listed users");
        Ok(users)
    }
}

#[async_trait]
impl UserRegistration for UserDirectoryService {
    async fn register(&self, user: &NewUser) -> Result<User, Error> {
        let created = self
            .repository
            .insert(user)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %created.id(), "registered user");
        Ok(created)
    }
}
