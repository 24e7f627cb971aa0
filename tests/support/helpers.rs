// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::FixedClock;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use knowledge_base::application::ports::{ClockPort, SlugGeneratorPort};
use knowledge_base::application::services::{ApplicationServices, ServiceDependencies};
use knowledge_base::domain::article::ArticleWriteRepository;
use knowledge_base::domain::category::CategoryRepository;
use knowledge_base::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteHelpfulVoteRepository,
    },
    util::DefaultSlugGenerator,
};
use knowledge_base::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt as _;

pub const TEST_SEARCH_LIMIT: u32 = 50;

/// マイグレーション済みのインメモリ SQLite プールを作成する
pub async fn test_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    pool
}

/// 既定の実リポジトリから差し替える部品
#[derive(Default)]
pub struct ServiceOverrides {
    pub article_write_repo: Option<Arc<dyn ArticleWriteRepository>>,
    pub category_repo: Option<Arc<dyn CategoryRepository>>,
    pub search_limit: Option<u32>,
}

/// 実リポジトリと固定時計でサービスを組み立てる
pub fn build_services(pool: &SqlitePool) -> Arc<ApplicationServices> {
    build_services_with(pool, ServiceOverrides::default())
}

/// 指定した部品だけを差し替えてサービスを組み立てる
pub fn build_services_with(
    pool: &SqlitePool,
    overrides: ServiceOverrides,
) -> Arc<ApplicationServices> {
    let clock: Arc<ClockPort> = Arc::new(FixedClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let article_write_repo = overrides
        .article_write_repo
        .unwrap_or_else(|| Arc::new(SqliteArticleWriteRepository::new(pool.clone())));
    let category_repo = overrides
        .category_repo
        .unwrap_or_else(|| Arc::new(SqliteCategoryRepository::new(pool.clone())));

    Arc::new(ApplicationServices::new(ServiceDependencies {
        article_write_repo,
        article_read_repo: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        category_repo,
        vote_repo: Arc::new(SqliteHelpfulVoteRepository::new(pool.clone())),
        clock,
        slugger,
        search_limit: overrides.search_limit.unwrap_or(TEST_SEARCH_LIMIT),
    }))
}

pub async fn build_test_state() -> HttpState {
    let pool = test_pool().await;
    HttpState {
        services: build_services(&pool),
    }
}

pub async fn make_test_router() -> axum::Router {
    let state = build_test_state().await;
    build_router(state, &["*".to_string()])
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(HttpState { services }, &["*".to_string()])
}

/// JSON リクエストを送り、ステータスとボディを返す
pub async fn send_json(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    read_json(resp).await
}

/// フォーム形式のリクエストを送り、ステータスとボディを返す
pub async fn send_form(app: &axum::Router, uri: &str, form: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    read_json(resp).await
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
