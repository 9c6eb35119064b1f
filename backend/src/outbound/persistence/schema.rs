//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly. Regenerate with `diesel print-schema`
//! when the migration changes.

diesel::table! {
    /// Registered users.
    ///
    /// `name` and `email` carry unique constraints (`users_name_key`,
    /// `users_email_key`).
    users (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Unique user name (max 255 characters).
        name -> Varchar,
        /// Unique email address (max 255 characters).
        email -> Varchar,
        /// Age in years.
        age -> Int4,
    }
}
