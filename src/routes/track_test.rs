use super::*;

use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn query(action: Option<&str>) -> Query<TrackQuery> {
    Query(TrackQuery { action: action.map(str::to_owned) })
}

fn ping(page: Option<&str>, code: Option<&str>) -> Form<TrackForm> {
    Form(TrackForm { page: page.map(str::to_owned), code: code.map(str::to_owned) })
}

/// Serve the full router on an ephemeral port and return its address.
async fn serve_app() -> std::net::SocketAddr {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = crate::routes::app(Path::new("site"));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Post a url-encoded `body` to `path` and return the response status code.
async fn post_form(addr: std::net::SocketAddr, path: &str, body: &str) -> u16 {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "POST {path} HTTP/1.1\r\nHost: localhost\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        landing::net::beacon::FORM_CONTENT_TYPE,
        body.len(),
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    let status_line = response.lines().next().unwrap();
    status_line.split_whitespace().nth(1).unwrap().parse().unwrap()
}

#[tokio::test]
async fn index_ping_is_accepted() {
    let status = track(query(Some("track")), ping(Some("index"), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn ping_with_code_is_accepted() {
    let status = track(query(Some("track")), ping(Some("success"), Some("666"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_code_is_still_accepted() {
    let status = track(query(Some("track")), ping(Some("index"), Some("not-a-code"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn missing_action_is_rejected() {
    let status = track(query(None), ping(Some("index"), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn other_action_is_rejected() {
    let status = track(query(Some("redeem")), ping(Some("index"), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_page_is_rejected() {
    let status = track(query(Some("track")), ping(Some("  "), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_page_is_rejected() {
    let status = track(query(Some("track")), ping(None, Some("666"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn router_accepts_form_ping() {
    let addr = serve_app().await;
    assert_eq!(post_form(addr, "/api.php?action=track", "page=index&code=666").await, 204);
}

#[tokio::test]
async fn router_rejects_form_without_page() {
    let addr = serve_app().await;
    assert_eq!(post_form(addr, "/api.php?action=track", "code=666").await, 400);
}

#[tokio::test]
async fn router_rejects_other_action_without_page() {
    let addr = serve_app().await;
    assert_eq!(post_form(addr, "/api.php?action=other", "code=666").await, 400);
}

#[tokio::test]
async fn router_rejects_empty_body() {
    let addr = serve_app().await;
    assert_eq!(post_form(addr, "/api.php?action=track", "").await, 400);
}
