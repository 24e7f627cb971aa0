// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AssignCategoriesCommand, CastVoteCommand, CreateArticleCommand, TransitionArticleCommand,
        UpdateArticleCommand,
    },
    dto::{
        ArticleDetailDto, ArticleDto, ArticleVotesDto, CategoryDto, HelpfulVoteDto,
        StatusChangeDto, TransitionOptionsDto,
    },
    queries::articles::{
        ArticleVotesQuery, GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery,
        StatusHistoryQuery, TransitionOptionsQuery,
    },
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Payload;
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Only articles in this status.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    /// `order`, `name` or `created_at`.
    #[serde(default)]
    pub sort: Option<String>,
    /// `asc` or `desc`.
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub name: String,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub featured: Option<bool>,
    /// Initial status; defaults to `draft`.
    #[serde(default)]
    pub status: Option<String>,
    /// Accepted for compatibility; the slug is always derived from `name`.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

/// Status is deliberately absent: it changes only through the transition endpoint.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateArticleRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
    pub featured: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionRequest {
    /// Target status name.
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignCategoriesRequest {
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    pub helpful: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles.", body = crate::presentation::http::openapi::ArticleListResponse),
        (status = 422, description = "Invalid filter or sort.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let page = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            status: params.status,
            featured: params.featured,
            sort: params.sort,
            direction: params.direction,
            limit: params.limit.unwrap_or_default(),
            offset: params.offset.unwrap_or_default(),
        })
        .await
        .into_http()?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = crate::application::dto::ArticleDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Validation error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Payload(payload): Payload<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    if let Some(slug) = payload.slug.as_deref() {
        tracing::debug!(slug, "ignoring client supplied slug");
    }

    let command = CreateArticleCommand {
        name: payload.name,
        content: payload.content,
        author_id: payload.author_id,
        order: payload.order,
        featured: payload.featured,
        status: payload.status,
        category_ids: payload.category_ids,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with categories and votes.", body = crate::application::dto::ArticleDetailDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDetailDto>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(Json(article))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with categories and votes.", body = crate::application::dto::ArticleDetailDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;

    Ok(Json(article))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = crate::application::dto::ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent update or slug taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Validation error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Payload(payload): Payload<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        name: payload.name,
        content: payload.content,
        order: payload.order,
        featured: payload.featured,
    };

    let article = state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    Ok(Json(article))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/transition",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Status changed.", body = crate::application::dto::ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Status changed concurrently.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Transition not allowed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn transition_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Payload(payload): Payload<TransitionRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .article_commands
        .transition_article(TransitionArticleCommand {
            id,
            status: payload.status,
        })
        .await
        .into_http()?;

    Ok(Json(article))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/transitions",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Current status and allowed targets.", body = crate::application::dto::TransitionOptionsDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn transition_options(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TransitionOptionsDto>> {
    let options = state
        .services
        .article_queries
        .transition_options(TransitionOptionsQuery { id })
        .await
        .into_http()?;

    Ok(Json(options))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/status-history",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Status changes, oldest first.", body = [crate::application::dto::StatusChangeDto]),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn status_history(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<StatusChangeDto>>> {
    let history = state
        .services
        .article_queries
        .status_history(StatusHistoryQuery { id })
        .await
        .into_http()?;

    Ok(Json(history))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/categories",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = AssignCategoriesRequest,
    responses(
        (status = 200, description = "Categories now attached to the article.", body = [crate::application::dto::CategoryDto]),
        (status = 404, description = "Article or category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid category id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn assign_categories(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Payload(payload): Payload<AssignCategoriesRequest>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    let categories = state
        .services
        .article_commands
        .assign_categories(AssignCategoriesCommand {
            article_id: id,
            category_ids: payload.category_ids,
        })
        .await
        .into_http()?;

    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/votes",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = VoteRequest,
    responses(
        (status = 201, description = "Vote recorded.", body = crate::application::dto::HelpfulVoteDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Votes"
)]
pub async fn cast_vote(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Payload(payload): Payload<VoteRequest>,
) -> HttpResult<(StatusCode, Json<HelpfulVoteDto>)> {
    let vote = state
        .services
        .article_commands
        .cast_vote(CastVoteCommand {
            article_id: id,
            helpful: payload.helpful,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(vote)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/votes",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Votes and their tally.", body = crate::application::dto::ArticleVotesDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Votes"
)]
pub async fn list_votes(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleVotesDto>> {
    let votes = state
        .services
        .article_queries
        .article_votes(ArticleVotesQuery { article_id: id })
        .await
        .into_http()?;

    Ok(Json(votes))
}

#[utoipa::path(
    get,
    path = "/api/v1/article-statuses",
    responses(
        (status = 200, description = "Every article status name.", body = [crate::domain::article::ArticleStatus])
    ),
    tag = "Articles"
)]
pub async fn list_article_statuses(
    Extension(state): Extension<HttpState>,
) -> Json<Vec<ArticleStatus>> {
    Json(state.services.article_queries.statuses())
}
