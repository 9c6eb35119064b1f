//! Plain-text greeting served at the API root.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

/// Body returned by [`greeting`].
pub const GREETING: &str = "Hello World!";

/// Static greeting. Never touches the store, so it answers even while the
/// database is down.
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "greeting"
)]
#[get("")]
pub async fn greeting() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}
