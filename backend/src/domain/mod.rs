//! Domain primitives, ports and use-case services.
//!
//! Purpose: define the user directory's entities and the boundaries adapters
//! plug into. Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - User / NewUser / UserId: the persisted entity and its creation request.
//! - TraceId: request correlation identifier held in task-local storage.
//! - UserDirectoryService: implements the users query and registration ports.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserId};
pub use self::user_directory::UserDirectoryService;
