//! Users API handlers.
//!
//! ```text
//! GET  /api/all
//! POST /api/form {"name":"alice","email":"alice@example.com","age":30}
//! POST /api/form name=alice&email=alice%40example.com&age=30
//! ```
//!
//! The create endpoint does no business validation: uniqueness and
//! non-null rules belong to the store. A body that cannot be decoded into a
//! [`NewUser`] fails exactly like a store constraint violation.

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::{Either, HttpRequest, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// `age` as submitted: JSON clients send a number, HTML forms send text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AgeField {
    /// A JSON number.
    Integer(i64),
    /// Form-encoded (or quoted JSON) text.
    Text(String),
}

/// Body of `POST /api/form`, in either JSON or form encoding.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Unique user name.
    #[schema(example = "alice")]
    pub name: String,
    /// Unique email address.
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Age in years; a decimal integer string is accepted too.
    #[schema(value_type = i32, example = 30)]
    pub age: AgeField,
}

/// Reasons a decoded body still cannot become a [`NewUser`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserRejection {
    /// `age` text is not a decimal integer.
    #[error("age must be an integer, got {raw:?}")]
    AgeNotInteger {
        /// Submitted text.
        raw: String,
    },
    /// `age` does not fit the store's `INT` column.
    #[error("age {value} is out of range")]
    AgeOutOfRange {
        /// Submitted number.
        value: i64,
    },
}

impl TryFrom<AgeField> for i32 {
    type Error = CreateUserRejection;

    fn try_from(value: AgeField) -> Result<Self, Self::Error> {
        match value {
            AgeField::Integer(value) => {
                i32::try_from(value).map_err(|_| CreateUserRejection::AgeOutOfRange { value })
            }
            AgeField::Text(raw) => match raw.parse::<i64>() {
                Ok(value) => i32::try_from(AgeField::Integer(value)),
                Err(_) => Err(CreateUserRejection::AgeNotInteger { raw }),
            },
        }
    }
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = CreateUserRejection;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let CreateUserRequest { name, email, age } = value;
        Ok(NewUser::new(name, email, i32::try_from(age)?))
    }
}

fn map_create_rejection(err: CreateUserRejection) -> Error {
    warn!(error = %err, "create user body rejected");
    Error::internal(err.to_string()).with_details(json!({ "field": "age" }))
}

fn undecodable_body(reason: impl std::fmt::Display) -> actix_web::Error {
    warn!(error = %reason, "create user body could not be decoded");
    Error::internal(format!("undecodable request body: {reason}")).into()
}

// The create endpoint tries JSON first and falls back to form decoding, so a
// content type mismatch on one side is expected and not worth a warning.
fn other_encoding(expected: &'static str) -> actix_web::Error {
    debug!(expected, "request body uses another encoding");
    Error::internal(format!("request body is not {expected}")).into()
}

/// JSON extractor settings: decoding failures become the standard envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        match err {
            JsonPayloadError::ContentType => other_encoding("application/json"),
            other => undecodable_body(other),
        }
    })
}

/// Form extractor settings: decoding failures become the standard envelope.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err: UrlencodedError, _req: &HttpRequest| {
        match err {
            UrlencodedError::ContentType => other_encoding("application/x-www-form-urlencoded"),
            other => undecodable_body(other),
        }
    })
}

/// List every stored user. An empty store yields `[]`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use user_service::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/all",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/all")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Create a user and echo the submitted fields.
///
/// The response deliberately omits the generated id.
#[utoipa::path(
    post,
    path = "/api/form",
    request_body(
        content(
            (CreateUserRequest = "application/json"),
            (CreateUserRequest = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 200, description = "User created", body = NewUser),
        (status = 500, description = "Duplicate user or undecodable body", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/form")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: Either<web::Json<CreateUserRequest>, web::Form<CreateUserRequest>>,
) -> ApiResult<web::Json<NewUser>> {
    let request = match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };
    let new_user = NewUser::try_from(request).map_err(map_create_rejection)?;
    state.registration.register(&new_user).await?;
    Ok(web::Json(new_user))
}

#[cfg(test)]
mod tests;
