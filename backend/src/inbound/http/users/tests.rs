//! Handler tests for the users endpoints, run against the in-memory store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockUserRegistration, MockUsersQuery, UserPersistenceError};
use crate::domain::{TRACE_ID_HEADER, UserDirectoryService};
use crate::inbound::http::api_scope;
use crate::inbound::http::error::REDACTED_MESSAGE;
use crate::middleware::Trace;
use crate::test_support::MemoryUserRepository;

#[fixture]
fn repository() -> Arc<MemoryUserRepository> {
    Arc::new(MemoryUserRepository::new())
}

fn state_over(repository: Arc<MemoryUserRepository>) -> HttpState {
    HttpState::from_service(Arc::new(UserDirectoryService::new(repository)))
}

macro_rules! init_app {
    ($state:expr) => {
        actix_test::init_service(
            App::new()
                .wrap(Trace)
                .app_data(web::Data::new($state))
                .service(api_scope()),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $body:expr) => {{
        let req = actix_test::TestRequest::post()
            .uri("/api/form")
            .set_json($body)
            .to_request();
        let res = actix_test::call_service($app, req).await;
        let status = res.status();
        let body: Value = actix_test::read_body_json(res).await;
        (status, body)
    }};
}

macro_rules! list_all {
    ($app:expr) => {{
        let req = actix_test::TestRequest::get().uri("/api/all").to_request();
        let res = actix_test::call_service($app, req).await;
        let status = res.status();
        let body: Value = actix_test::read_body_json(res).await;
        (status, body)
    }};
}

#[rstest]
#[actix_web::test]
async fn created_user_is_echoed_and_listed(repository: Arc<MemoryUserRepository>) {
    let app = init_app!(state_over(repository));
    let alice = json!({ "name": "alice", "email": "alice@example.com", "age": 30 });

    let (status, echo) = post_json!(&app, alice.clone());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echo, alice);

    let (status, listed) = list_all!(&app);
    assert_eq!(status, StatusCode::OK);
    let rows = listed.as_array().expect("list is an array");
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["id"].is_i64());
    assert_eq!(rows[0]["name"], "alice");
    assert_eq!(rows[0]["email"], "alice@example.com");
    assert_eq!(rows[0]["age"], 30);
}

#[rstest]
#[actix_web::test]
async fn empty_store_lists_empty_array(repository: Arc<MemoryUserRepository>) {
    let app = init_app!(state_over(repository));

    let (status, listed) = list_all!(&app);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[rstest]
#[actix_web::test]
async fn form_encoded_body_is_accepted(repository: Arc<MemoryUserRepository>) {
    let app = init_app!(state_over(repository.clone()));
    let req = actix_test::TestRequest::post()
        .uri("/api/form")
        .set_form([("name", "bob"), ("email", "bob@example.com"), ("age", "41")])
        .to_request();

    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let echo: Value = actix_test::read_body_json(res).await;

    assert_eq!(
        echo,
        json!({ "name": "bob", "email": "bob@example.com", "age": 41 })
    );
    assert_eq!(repository.users().len(), 1);
}

#[rstest]
#[case::same_name(json!({ "name": "alice", "email": "other@example.com", "age": 22 }))]
#[case::same_email(json!({ "name": "alicia", "email": "alice@example.com", "age": 22 }))]
#[actix_web::test]
async fn duplicates_fail_and_are_not_listed(
    repository: Arc<MemoryUserRepository>,
    #[case] duplicate: Value,
) {
    let app = init_app!(state_over(repository));
    let (status, _) = post_json!(
        &app,
        json!({ "name": "alice", "email": "alice@example.com", "age": 30 })
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json!(&app, duplicate);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], REDACTED_MESSAGE);
    assert!(body.get("details").is_none());

    let (_, listed) = list_all!(&app);
    let rows = listed.as_array().expect("list is an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["age"], 30);
}

#[rstest]
#[case::word(json!({ "name": "carol", "email": "carol@example.com", "age": "thirty" }))]
#[case::fraction(json!({ "name": "carol", "email": "carol@example.com", "age": 30.5 }))]
#[case::null(json!({ "name": "carol", "email": "carol@example.com", "age": null }))]
#[case::missing_age(json!({ "name": "carol", "email": "carol@example.com" }))]
#[case::missing_name(json!({ "email": "carol@example.com", "age": 30 }))]
#[actix_web::test]
async fn undecodable_bodies_fail_without_storing(
    repository: Arc<MemoryUserRepository>,
    #[case] body: Value,
) {
    let app = init_app!(state_over(repository.clone()));

    let (status, payload) = post_json!(&app, body);

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload["message"], REDACTED_MESSAGE);
    assert!(repository.users().is_empty());
}

#[rstest]
#[actix_web::test]
async fn non_integer_form_age_fails(repository: Arc<MemoryUserRepository>) {
    let app = init_app!(state_over(repository.clone()));
    let req = actix_test::TestRequest::post()
        .uri("/api/form")
        .set_form([("name", "dave"), ("email", "dave@example.com"), ("age", "old")])
        .to_request();

    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(repository.users().is_empty());
}

#[rstest]
#[case::apostrophe("O'Brien")]
#[case::statement_breakout("x', '', 0); DROP TABLE users; --")]
#[actix_web::test]
async fn quote_characters_round_trip_verbatim(
    repository: Arc<MemoryUserRepository>,
    #[case] name: &str,
) {
    let app = init_app!(state_over(repository));
    let submitted = json!({ "name": name, "email": "quoted@example.com", "age": 52 });

    let (status, echo) = post_json!(&app, submitted.clone());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echo, submitted);

    let (_, listed) = list_all!(&app);
    assert_eq!(listed[0]["name"], name);
}

#[rstest]
#[actix_web::test]
async fn store_outage_is_reported_as_unavailable(repository: Arc<MemoryUserRepository>) {
    repository.fail_with(UserPersistenceError::connection("connection refused"));
    let app = init_app!(state_over(repository));

    let req = actix_test::TestRequest::get().uri("/api/all").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "service_unavailable");
    assert_eq!(body["message"], "database unavailable");
    assert_eq!(body["traceId"], header.as_str());
}

#[rstest]
#[actix_web::test]
async fn rejected_body_never_reaches_registration() {
    let mut registration = MockUserRegistration::new();
    registration.expect_register().never();
    let state = HttpState::new(Arc::new(MockUsersQuery::new()), Arc::new(registration));
    let app = init_app!(state);

    let (status, _) = post_json!(
        &app,
        json!({ "name": "erin", "email": "erin@example.com", "age": "forty" })
    );

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
#[case(AgeField::Integer(30), Ok(30))]
#[case(AgeField::Text("30".into()), Ok(30))]
#[case(
    AgeField::Text(" 7 ".into()),
    Err(CreateUserRejection::AgeNotInteger { raw: " 7 ".into() })
)]
#[case(AgeField::Text("-3".into()), Ok(-3))]
#[case(
    AgeField::Text("3.5".into()),
    Err(CreateUserRejection::AgeNotInteger { raw: "3.5".into() })
)]
#[case(
    AgeField::Integer(1 << 40),
    Err(CreateUserRejection::AgeOutOfRange { value: 1 << 40 })
)]
fn age_field_conversion(#[case] field: AgeField, #[case] expected: Result<i32, CreateUserRejection>) {
    assert_eq!(i32::try_from(field), expected);
}
