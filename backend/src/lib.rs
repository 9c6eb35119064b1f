//! User service library: a small PostgreSQL-backed user directory over HTTP.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: users, errors, trace ids, ports and the directory service.
//! - [`inbound`]: actix-web handlers that call the domain ports.
//! - [`outbound`]: Diesel adapters implementing the repository port.
//!
//! The binary wires these together; see `src/main.rs`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
