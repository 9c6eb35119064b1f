//! Driving port for creating users.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Domain use-case port for registering a new user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Persist `user` and return the stored record including its id.
    ///
    /// Duplicate names or emails fail; nothing is stored in that case.
    async fn register(&self, user: &NewUser) -> Result<User, Error>;
}
