// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, Page};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::search::search,
        crate::presentation::http::controllers::articles::list_article_statuses,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::transition_article,
        crate::presentation::http::controllers::articles::transition_options,
        crate::presentation::http::controllers::articles::status_history,
        crate::presentation::http::controllers::articles::assign_categories,
        crate::presentation::http::controllers::articles::cast_vote,
        crate::presentation::http::controllers::articles::list_votes,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::search::SearchRequest,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::TransitionRequest,
            crate::presentation::http::controllers::articles::AssignCategoriesRequest,
            crate::presentation::http::controllers::articles::VoteRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::domain::article::ArticleStatus,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::StatusChangeDto,
            crate::application::dto::TransitionOptionsDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::HelpfulVoteDto,
            crate::application::dto::VoteTallyDto,
            crate::application::dto::ArticleVotesDto
        )
    ),
    tags(
        (name = "Search", description = "Full-text search over published articles"),
        (name = "Articles", description = "Article management and status lifecycle"),
        (name = "Categories", description = "Article categories"),
        (name = "Votes", description = "Helpful votes on articles"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Knowledge Base API",
        description = "Knowledge base articles with a status lifecycle and search",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

impl From<Page<ArticleDto>> for ArticleListResponse {
    fn from(page: Page<ArticleDto>) -> Self {
        Self {
            items: page.items,
            limit: page.limit,
            offset: page.offset,
            has_more: page.has_more,
        }
    }
}
