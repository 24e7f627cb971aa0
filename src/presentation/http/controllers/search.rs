// src/presentation/http/controllers/search.rs
use crate::application::{dto::ArticleDto, queries::articles::SearchArticlesQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Payload;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Search term, matched against article name and content.
    #[serde(default)]
    pub s: Option<String>,
}

#[utoipa::path(
    post,
    path = "/search",
    operation_id = "search.retrieve",
    request_body(
        content(
            (SearchRequest = "application/json"),
            (SearchRequest = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 200, description = "Published articles matching the term.", body = [crate::application::dto::ArticleDto]),
        (status = 422, description = "Missing or invalid search term.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Search"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Payload(payload): Payload<SearchRequest>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let articles = state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery { s: payload.s })
        .await
        .into_http()?;

    Ok(Json(articles))
}
