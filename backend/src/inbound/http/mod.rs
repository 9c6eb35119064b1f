//! HTTP inbound adapter exposing the users API and health probes.
//!
//! ```text
//! GET  /api        -> "Hello World!"
//! GET  /api/all    -> [{"id":1,"name":"alice","email":"alice@example.com","age":30}]
//! POST /api/form   -> {"name":"alice","email":"alice@example.com","age":30}
//! ```

pub mod error;
pub mod greeting;
pub mod health;
pub mod state;
pub mod users;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Path prefix shared by every users endpoint.
pub const API_PREFIX: &str = "/api";

/// Build the `/api` scope with body decoding configured for the create
/// endpoint.
///
/// Handlers read their ports from `web::Data<HttpState>`, which the caller
/// registers on the `App`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX)
        .app_data(users::json_config())
        .app_data(users::form_config())
        .service(greeting::greeting)
        .service(users::list_users)
        .service(users::create_user)
}
