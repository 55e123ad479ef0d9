use axum::http::{self, Request, StatusCode};
use echo_server::app;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn body_text(response: axum::response::Response) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

fn post(uri: &str, content_type: &str, body: impl Into<axum::body::Body>) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn post_form_body_is_echoed() {
    let resp = app()
        .oneshot(post(
            "/",
            "application/x-www-form-urlencoded",
            "message=Hello%20from%20React!",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::CONTENT_TYPE], "text/plain");
    assert_eq!(body_text(resp).await, "echo: message=Hello%20from%20React!");
}

#[tokio::test]
async fn post_plain_body_is_echoed() {
    let resp = app()
        .oneshot(post("/", "text/plain", "こんにちは"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "echo: こんにちは");
}

#[tokio::test]
async fn any_path_is_echoed() {
    let resp = app()
        .oneshot(post("/some/deep/path?x=1", "text/plain", "hi"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "echo: hi");
}

#[tokio::test]
async fn get_echoes_empty_body() {
    let resp = app()
        .oneshot(Request::builder().uri("/").body(axum::body::Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "echo: ");
}

#[tokio::test]
async fn echo_carries_cors_headers() {
    let resp = app().oneshot(post("/", "text/plain", "hi")).await.unwrap();

    let headers = resp.headers();
    assert_eq!(headers[http::header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[http::header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
    assert_eq!(headers[http::header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

// --- preflight ---

#[tokio::test]
async fn options_returns_empty_preflight() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/")
                .header("origin", "http://localhost:5173")
                .header("access-control-request-method", "POST")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(body_bytes(resp).await.is_empty());
}

// --- errors ---

#[tokio::test]
async fn non_utf8_body_returns_500() {
    let resp = app()
        .oneshot(post("/", "text/plain", vec![0xff_u8, 0xfe, 0x00]))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(body_text(resp).await.starts_with("Error: "));
}
