//! OpenAPI documentation for the users API.
//!
//! [`ApiDoc`] registers every inbound endpoint together with the `User`,
//! `NewUser` and `Error` schemas. Swagger UI serves it in debug builds and the
//! `openapi-dump` binary prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, NewUser, User};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "List and register users backed by PostgreSQL, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::greeting::greeting,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, NewUser, CreateUserRequest, Error, ErrorCode)),
    tags(
        (name = "users", description = "User directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
