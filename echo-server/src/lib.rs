use axum::{
    body::Bytes,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;

pub const DEFAULT_PORT: &str = "1234";

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Every path and method lands on the same handler.
pub fn app() -> Router {
    Router::new().fallback(handle)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn handle(method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return preflight();
    }
    match String::from_utf8(body.to_vec()) {
        Ok(text) => echo(&text),
        Err(e) => failure(&e.to_string()),
    }
}

fn echo(body: &str) -> Response {
    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("echo: {body}"),
    )
        .into_response();
    with_cors(&mut response, true);
    response
}

fn preflight() -> Response {
    let mut response = StatusCode::OK.into_response();
    with_cors(&mut response, true);
    response
}

fn failure(reason: &str) -> Response {
    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("Error: {reason}"),
    )
        .into_response();
    with_cors(&mut response, false);
    response
}

fn with_cors(response: &mut Response, full: bool) {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    if full {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
    }
}
