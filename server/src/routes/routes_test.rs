use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

async fn status_of(uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    static_routes(&assets_dir()).oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn serves_files_from_assets_dir() {
    let request = Request::builder().uri("/assets/favicon.svg").body(Body::empty()).unwrap();
    let response = static_routes(&assets_dir()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("image/svg+xml"), "got {content_type}");
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    assert_eq!(status_of("/assets/nope.png").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    assert_eq!(status_of("/api/gallery").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let request = Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap();
    let response = static_routes(&assets_dir()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
