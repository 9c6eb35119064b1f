//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn decode_response(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace header is ascii").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("error JSON decodes");
    (status, header, payload)
}

#[rstest]
#[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_matches_error_code(#[case] code: ErrorCode, #[case] expected: StatusCode) {
    assert_eq!(status_for(code), expected);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("duplicate key value violates unique constraint")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "constraint": "users_name_key" }));

    let (status, header, payload) = decode_response(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), REDACTED_MESSAGE);
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn unavailable_errors_keep_their_message() {
    let error = Error::service_unavailable("database unavailable");

    let (status, header, payload) = decode_response(&error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(header.is_none());
    assert_eq!(payload.message(), "database unavailable");
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
#[case(ErrorCode::ServiceUnavailable)]
#[case(ErrorCode::InternalError)]
fn every_code_maps_to_a_server_error(#[case] code: ErrorCode) {
    assert!(status_for(code).is_server_error());
}
