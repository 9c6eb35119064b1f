//! Internal Diesel row structs for the `users` table.
//!
//! These never leave the persistence layer; the repository converts them to
//! domain types.

use diesel::prelude::*;

use super::schema::users;
use crate::domain::{NewUser, User, UserId};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(UserId::new(row.id), row.name, row.email, row.age)
    }
}

/// Insertable struct for creating user records. The id is left to the
/// sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: user.name.as_str(),
            email: user.email.as_str(),
            age: user.age,
        }
    }
}
