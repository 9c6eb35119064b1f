//! Driven port for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection {
            /// Driver or pool error text.
            message: String,
        } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Driver error text.
            message: String,
        } => "user repository query failed: {message}",
        /// A uniqueness constraint rejected the insert.
        UniqueViolation {
            /// Violated constraint, such as `users_email_key`.
            constraint: String,
        } => "user repository unique constraint violated: {constraint}",
    }
}

/// Storage for the `users` table.
///
/// Implementations must bind every user-supplied value as a query parameter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in the order the store yields them.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a user and return it with the store-assigned id.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;
}
