// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

async fn create(app: &axum::Router, name: &str) -> serde_json::Value {
    let (status, body) = support::send_json(
        app,
        Method::POST,
        "/api/v1/articles",
        Some(json!({ "name": name, "content": "content", "author_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}

/// /health が 200 を返す
#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_test_router().await;

    let (status, body) = support::send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let direct = knowledge_base::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

/// OpenAPI ドキュメントに検索操作が含まれる
#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::make_test_router().await;

    let (status, body) =
        support::send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["paths"]["/search"]["post"]["operationId"],
        "search.retrieve"
    );
}

/// 作成すると draft・スラグ付きで 201 を返し、ID とスラグで取得できる
#[tokio::test]
async fn create_and_fetch_article() {
    let app = support::make_test_router().await;

    let created = create(&app, "First Steps").await;
    assert_eq!(created["status"], "draft");
    assert_eq!(created["slug"], "first-steps");
    assert_eq!(created["order"], 10);
    assert_eq!(created["featured"], false);
    assert_eq!(created["created_at"], "2024-01-01T00:00:00.000Z");

    let id = created["id"].as_i64().unwrap();
    let (status, detail) =
        support::send_json(&app, Method::GET, &format!("/api/v1/articles/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["name"], "First Steps");
    assert_eq!(detail["categories"], json!([]));
    assert_eq!(detail["vote_tally"]["total"], 0);

    let (status, by_slug) = support::send_json(
        &app,
        Method::GET,
        "/api/v1/articles/by-slug/first-steps",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["id"], id);
}

/// クライアント指定のスラグは無視される
#[tokio::test]
async fn client_slug_is_ignored() {
    let app = support::make_test_router().await;

    let (status, body) = support::send_json(
        &app,
        Method::POST,
        "/api/v1/articles",
        Some(json!({ "name": "Real Name", "slug": "custom", "content": "c", "author_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slug"], "real-name");
}

/// フォーム形式でも記事を作成できる
#[tokio::test]
async fn create_accepts_form_body() {
    let app = support::make_test_router().await;

    let (status, body) = support::send_form(
        &app,
        "/api/v1/articles",
        "name=Form+Article&content=Body&author_id=3&featured=true",
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    assert_eq!(body["slug"], "form-article");
    assert_eq!(body["author_id"], 3);
    assert_eq!(body["featured"], true);
}

/// 存在しない ID やスラグで 404 Not Found を返す
#[tokio::test]
async fn missing_article_returns_404() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/articles/by-slug/nonexistent")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/articles/999")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 同じスラグになる記事の作成は 409 Conflict
#[tokio::test]
async fn duplicate_slug_returns_409() {
    let app = support::make_test_router().await;
    create(&app, "Same Name").await;

    let (status, body) = support::send_json(
        &app,
        Method::POST,
        "/api/v1/articles",
        Some(json!({ "name": "same name", "content": "c", "author_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");
}

/// 入力不備は 422
#[tokio::test]
async fn invalid_create_returns_422() {
    let app = support::make_test_router().await;

    for payload in [
        json!({ "name": "  ", "content": "c", "author_id": 1 }),
        json!({ "name": "!!!", "content": "c", "author_id": 1 }),
        json!({ "name": "No Author", "content": "c", "author_id": 0 }),
        json!({ "name": "Bad Status", "content": "c", "author_id": 1, "status": "deleted" }),
        json!({ "content": "c", "author_id": 1 }),
    ] {
        let (status, body) =
            support::send_json(&app, Method::POST, "/api/v1/articles", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
    }
}

/// 更新で状態は変えられない
#[tokio::test]
async fn update_cannot_change_status() {
    let app = support::make_test_router().await;
    let id = create(&app, "Locked Status").await["id"].as_i64().unwrap();

    let (status, _) = support::send_json(
        &app,
        Method::PUT,
        &format!("/api/v1/articles/{id}"),
        Some(json!({ "status": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = support::send_json(
        &app,
        Method::PUT,
        &format!("/api/v1/articles/{id}"),
        Some(json!({ "name": "Unlocked Name", "featured": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "unlocked-name");
    assert_eq!(body["featured"], true);
    assert_eq!(body["status"], "draft");
}

/// 遷移エンドポイントで状態を変え、履歴と候補を取得できる
#[tokio::test]
async fn transition_endpoint_moves_status() {
    let app = support::make_test_router().await;
    let id = create(&app, "Workflow").await["id"].as_i64().unwrap();

    let (status, body) = support::send_json(
        &app,
        Method::POST,
        &format!("/api/v1/articles/{id}/transition"),
        Some(json!({ "status": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "published");

    let (status, body) = support::send_json(
        &app,
        Method::POST,
        &format!("/api/v1/articles/{id}/transition"),
        Some(json!({ "status": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("invalid transition"));

    let (status, options) = support::send_json(
        &app,
        Method::GET,
        &format!("/api/v1/articles/{id}/transitions"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(options["status"], "published");
    assert_eq!(options["allowed"], json!(["draft", "hidden", "archived"]));

    let (status, history) = support::send_json(
        &app,
        Method::GET,
        &format!("/api/v1/articles/{id}/status-history"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history[0]["from"], "draft");
    assert_eq!(history[0]["to"], "published");
}

/// ステータス一覧
#[tokio::test]
async fn article_statuses_are_listed() {
    let app = support::make_test_router().await;

    let (status, body) =
        support::send_json(&app, Method::GET, "/api/v1/article-statuses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["draft", "published", "hidden", "archived"]));
}

/// 一覧は order 昇順、limit と has_more を返す
#[tokio::test]
async fn list_articles_paginates() {
    let app = support::make_test_router().await;
    for (name, order) in [("A", 3), ("B", 1), ("C", 2)] {
        let (status, _) = support::send_json(
            &app,
            Method::POST,
            "/api/v1/articles",
            Some(json!({ "name": name, "content": "c", "author_id": 1, "order": order })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) =
        support::send_json(&app, Method::GET, "/api/v1/articles?limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["B", "C"]);
    assert_eq!(body["has_more"], true);

    let (status, body) =
        support::send_json(&app, Method::GET, "/api/v1/articles?sort=rank", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unprocessable Entity");
}

/// カテゴリと投票のエンドポイント
#[tokio::test]
async fn categories_and_votes_endpoints() {
    let app = support::make_test_router().await;
    let id = create(&app, "Helpful Thing").await["id"].as_i64().unwrap();

    let (status, category) = support::send_json(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "name": "Getting Started" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["slug"], "getting-started");

    let (status, _) = support::send_json(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "name": "getting started" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, assigned) = support::send_json(
        &app,
        Method::PUT,
        &format!("/api/v1/articles/{id}/categories"),
        Some(json!({ "category_ids": [category["id"]] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assigned[0]["name"], "Getting Started");

    for helpful in [true, false, true] {
        let (status, vote) = support::send_json(
            &app,
            Method::POST,
            &format!("/api/v1/articles/{id}/votes"),
            Some(json!({ "helpful": helpful })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(vote["helpful"], helpful);
    }

    let (status, votes) = support::send_json(
        &app,
        Method::GET,
        &format!("/api/v1/articles/{id}/votes"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(votes["tally"], json!({ "helpful": 2, "not_helpful": 1, "total": 3 }));

    let (status, categories) =
        support::send_json(&app, Method::GET, "/api/v1/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(categories.as_array().unwrap().len(), 1);
}
