//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapter**: [`DieselUserRepository`] only translates between Diesel
//!   rows and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async-safe pooling**: connections come from a `bb8` pool through
//!   `diesel-async`.
//! - **Schema first**: [`apply_schema`] runs the embedded migrations before
//!   the server accepts traffic.
//!
//! # Example
//!
//! ```ignore
//! use user_service::outbound::persistence::{DbPool, PoolConfig, DieselUserRepository};
//!
//! let config = PoolConfig::new("postgres://localhost/users");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod models;
mod pool;
mod schema;
mod schema_setup;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
pub use schema_setup::{MIGRATIONS, SchemaSetupError, apply_schema, apply_schema_blocking};
