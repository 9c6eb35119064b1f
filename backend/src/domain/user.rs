//! User data model.
//!
//! The store owns every rule about users: it assigns identifiers and enforces
//! name/email uniqueness. These types only carry values between the layers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier (`SERIAL` primary key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier read back from the store.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user awaiting insertion.
///
/// Also the echo body of the create operation: the generated id is not part
/// of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    /// Unique user name.
    #[schema(example = "alice")]
    pub name: String,
    /// Unique email address.
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Age in years.
    #[schema(example = 30)]
    pub age: i32,
}

impl NewUser {
    /// Build a creation request.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` was assigned by the store exactly once and never changes.
/// - `name` and `email` are unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    #[schema(value_type = i32, example = 1)]
    id: UserId,
    #[schema(example = "alice")]
    name: String,
    #[schema(example = "alice@example.com")]
    email: String,
    #[schema(example = 30)]
    age: i32,
}

impl User {
    /// Assemble a persisted user from its stored columns.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Combine a creation request with the id the store assigned to it.
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        let NewUser { name, email, age } = new_user;
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique user name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Unique email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in years.
    pub fn age(&self) -> i32 {
        self.age
    }
}

impl From<User> for NewUser {
    fn from(value: User) -> Self {
        let User {
            name, email, age, ..
        } = value;
        Self { name, email, age }
    }
}
