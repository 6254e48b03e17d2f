use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

async fn get(path: &str) -> (StatusCode, String, String) {
    let response = router(make_test_state(), ASSETS_DIR)
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn serves_the_page_at_the_root() {
    let (status, content_type, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("attendanceList"));
    assert!(body.contains("script.js"));
}

#[rstest]
#[case("/index.html", "html")]
#[case("/script.js", "javascript")]
#[case("/style.css", "css")]
#[tokio::test]
async fn serves_assets_unmodified(#[case] path: &str, #[case] expected_type: &str) {
    let (status, content_type, body) = get(path).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.contains(expected_type), "{content_type}");
    let on_disk = std::fs::read_to_string(format!("{ASSETS_DIR}{path}")).unwrap();
    assert_eq!(body, on_disk);
}

#[tokio::test]
async fn returns_404_for_unknown_files() {
    let (status, _, _) = get("/missing.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
