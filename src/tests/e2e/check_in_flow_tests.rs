use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

fn app() -> Router {
    router(make_test_state(), ASSETS_DIR)
}

async fn check_in(app: &Router, body: &'static str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/checkin")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn attendees(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(Request::get("/api/attendees").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn lists_only_the_seed_on_an_untouched_store() {
    assert_eq!(attendees(&app()).await, r#"{"Akash":1}"#);
}

#[tokio::test]
async fn lists_a_new_attendee_after_check_in() {
    let app = app();

    let (status, body) = check_in(&app, r#"{"name":"Bo"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "name": "Bo", "count": 1 }));
    assert_eq!(attendees(&app).await, r#"{"Akash":1,"Bo":1}"#);
}

#[tokio::test]
async fn counts_repeat_check_ins_monotonically() {
    let app = app();

    let mut counts = Vec::new();
    for _ in 0..3 {
        let (status, body) = check_in(&app, r#"{"name":"Akash"}"#).await;
        assert_eq!(status, StatusCode::OK);
        counts.push(body["count"].as_u64().unwrap());
    }

    assert_eq!(counts, vec![2, 3, 4]);
    assert_eq!(attendees(&app).await, r#"{"Akash":4}"#);
}

#[tokio::test]
async fn leaves_the_store_alone_on_a_blank_name() {
    let app = app();

    let (status, body) = check_in(&app, r#"{"name":"  "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Name is required" }));
    assert_eq!(attendees(&app).await, r#"{"Akash":1}"#);
}

#[tokio::test]
async fn treats_names_case_sensitively() {
    let app = app();

    check_in(&app, r#"{"name":"akash"}"#).await;

    assert_eq!(attendees(&app).await, r#"{"Akash":1,"akash":1}"#);
}

#[tokio::test]
async fn shares_the_store_between_http_and_graphql() {
    let app = app();
    check_in(&app, r#"{"name":"Bo"}"#).await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/graphql")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"query":"mutation { checkIn(name: \"Bo\") { name count } }"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json["data"],
        serde_json::json!({ "checkIn": { "name": "Bo", "count": 2 } })
    );
    assert_eq!(attendees(&app).await, r#"{"Akash":1,"Bo":2}"#);
}
