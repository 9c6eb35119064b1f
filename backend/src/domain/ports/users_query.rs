//! Driving port for listing users.
//!
//! Inbound adapters (HTTP handlers) use this port to read the user directory
//! without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all users. An empty directory is a success, not an error.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
