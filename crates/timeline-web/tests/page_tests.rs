//! Integration tests for the HTML pages, redirects and the not-found
//! fallback.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use timeline_chat::{BackendType, ChatConfig, create_gateway};
use timeline_core::Catalog;
use timeline_web::{AppState, build_router};
use tower::ServiceExt;

const TEST_KEY: &str = "site-test-key-5678";

fn state_with(config: &ChatConfig, catalog: Catalog) -> Arc<AppState> {
    let state = AppState::new(
        catalog,
        create_gateway(config),
        config.system_preamble.clone(),
    )
    .unwrap();
    Arc::new(state)
}

fn make_state(backend: BackendType) -> Arc<AppState> {
    let config = ChatConfig {
        backend,
        ..ChatConfig::default()
    };
    state_with(&config, Catalog::vietnam_1954_1964().unwrap())
}

/// Gemini backend with a credential, aimed at a port nothing listens on.
async fn unreachable_gemini_state() -> Arc<AppState> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ChatConfig {
        backend: BackendType::Gemini,
        api_url: format!("http://{addr}/v1beta"),
        api_key: Some(TEST_KEY.to_owned()),
        ..ChatConfig::default()
    };
    state_with(&config, Catalog::vietnam_1954_1964().unwrap())
}

async fn send(state: Arc<AppState>, request: Request<Body>) -> (StatusCode, String, Option<String>) {
    let response = build_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap(), location)
}

async fn get(uri: &str) -> (StatusCode, String, Option<String>) {
    send(
        make_state(BackendType::Offline),
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

fn ask_request(question: &str) -> Request<Body> {
    let body = format!("question={}", urlencode(question));
    Request::builder()
        .method("POST")
        .uri("/history/ask")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Minimal form encoding for test input.
fn urlencode(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                char::from(b).to_string()
            }
            b' ' => String::from("+"),
            _ => format!("%{b:02X}"),
        })
        .collect()
}

#[tokio::test]
async fn home_and_alias() {
    for uri in ["/", "/home"] {
        let (status, html, _) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(html.contains("Khám phá dòng thời gian"));
        assert!(html.contains("href=\"/history\""));
    }
}

#[tokio::test]
async fn history_has_all_section_anchors() {
    let (status, html, _) = get("/history").await;
    assert_eq!(status, StatusCode::OK);
    for anchor in ["timeline", "actors", "debate", "conclusion", "sources", "ask"] {
        assert!(html.contains(&format!("id=\"{anchor}\"")), "missing #{anchor}");
    }
    assert!(html.contains("Hiệp định Genève"));
    assert!(html.contains("<details>"));
    assert!(html.contains("<div class=\"years\">1955–1956</div>"));
    assert!(html.contains("<div class=\"years\">1963</div>"));
    assert!(html.contains("action=\"/history/ask#ask\""));
}

#[tokio::test]
async fn ask_renders_answer_inline() {
    let (status, html, _) = send(
        make_state(BackendType::Offline),
        ask_request("Phong trào Đồng khởi?"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Nghị quyết 15 (1959)"));
    assert!(!html.contains("Lỗi AI"));
}

#[tokio::test]
async fn ask_without_credential_shows_inline_error() {
    let (status, html, _) = send(make_state(BackendType::Gemini), ask_request("Genève?")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("❌ Lỗi AI: Missing Gemini API key"));
    assert!(html.contains("id=\"timeline\""));
}

#[tokio::test]
async fn ask_upstream_failure_shows_inline_error() {
    let (status, html, _) = send(unreachable_gemini_state().await, ask_request("Genève?")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("❌ Lỗi AI: Gemini request failed"));
    assert!(!html.contains(TEST_KEY));
    assert!(html.contains("id=\"timeline\""));
}

#[tokio::test]
async fn blank_question_renders_plain_page() {
    let (status, html, _) = send(make_state(BackendType::Gemini), ask_request("   ")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("Lỗi AI"));
}

#[tokio::test]
async fn map_filters_from_query() {
    let (status, html, _) = get("/map?year=1956&actors=South,US").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("id=\"event-no-election-1956\""));
    assert!(!html.contains("id=\"event-geneva-context-1954\""));
    assert!(!html.contains("id=\"event-tonkin-1964\""));
    assert!(html.contains("Sự kiện hiển thị: <strong>1</strong>"));
    assert!(html.contains("Tổng sự kiện: <strong>7</strong>"));
}

#[tokio::test]
async fn map_treats_unknown_topic_as_all() {
    let (status, html, _) = get("/map?topic=weather").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sự kiện hiển thị: <strong>7</strong>"));
}

#[tokio::test]
async fn map_with_no_actor_shows_empty_list() {
    let (_, html, _) = get("/map?actors=none").await;
    assert!(html.contains("Sự kiện hiển thị: <strong>0</strong>"));
    assert!(html.contains("Không có sự kiện nào khớp bộ lọc."));
}

#[tokio::test]
async fn placeholders_render() {
    let (status, html, _) = get("/login").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Đăng nhập"));

    let (status, html, _) = get("/register").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Đăng ký"));
}

#[tokio::test]
async fn dashboard_paths_redirect() {
    for uri in ["/dashboard", "/admin"] {
        let (status, _, location) = get(uri).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT, "{uri}");
        assert_eq!(location.as_deref(), Some("/admin/dashboard"));
    }
}

#[tokio::test]
async fn dashboard_uses_admin_layout() {
    let (status, html, _) = get("/admin/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<aside>"));
    assert!(html.contains("Mốc sự kiện"));
    assert!(html.contains("<div class=\"value\">1954–1964 <small></small></div>"));
}

#[tokio::test]
async fn dashboard_period_follows_catalog() {
    let events = Catalog::vietnam_1954_1964()
        .unwrap()
        .events()
        .iter()
        .filter(|e| e.year <= 1960)
        .cloned()
        .collect();
    let state = state_with(&ChatConfig::default(), Catalog::new(events).unwrap());
    let (status, html, _) = send(
        state,
        Request::builder()
            .uri("/admin/dashboard")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<div class=\"value\">1954–1960 <small></small></div>"));
    assert!(html.contains("<div class=\"value\">4 <small>mốc</small></div>"));
}

#[tokio::test]
async fn unknown_path_is_not_found_page() {
    for uri in ["/nonexistent", "/admin/nope", "/api/nope"] {
        let (status, html, _) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(html.contains("Trang không tồn tại"));
    }
}
