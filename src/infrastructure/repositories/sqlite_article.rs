// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleListing, ArticleName, ArticleReadRepository,
    ArticleSlug, ArticleStatus, ArticleUpdate, ArticleWriteRepository, AuthorId, NewArticle,
    StatusChange,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str =
    "id, name, slug, content, author_id, \"order\", featured, status, version, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    name: String,
    slug: String,
    content: String,
    author_id: i64,
    order: i32,
    featured: bool,
    status: String,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let stored = NewArticle {
            name: ArticleName::new(row.name)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content)?,
            author_id: AuthorId::new(row.author_id)?,
            order: row.order,
            featured: row.featured,
            status: row.status.parse::<ArticleStatus>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };
        Ok(Article::restore(ArticleId::new(row.id)?, row.version, stored))
    }
}

#[derive(Debug, FromRow)]
struct StatusChangeRow {
    article_id: i64,
    from_status: String,
    to_status: String,
    changed_at: DateTime<Utc>,
}

impl TryFrom<StatusChangeRow> for StatusChange {
    type Error = DomainError;

    fn try_from(row: StatusChangeRow) -> Result<Self, Self::Error> {
        Ok(StatusChange {
            article_id: ArticleId::new(row.article_id)?,
            from: row.from_status.parse()?,
            to: row.to_status.parse()?,
            changed_at: row.changed_at,
        })
    }
}

async fn article_exists<'e, E>(executor: E, id: ArticleId) -> DomainResult<bool>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles WHERE id = ?")
        .bind(i64::from(id))
        .fetch_one(executor)
        .await
        .map_err(map_sqlx)?;
    Ok(count > 0)
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle, categories: &[CategoryId]) -> DomainResult<Article> {
        let NewArticle {
            name,
            slug,
            content,
            author_id,
            order,
            featured,
            status,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (name, slug, content, author_id, \"order\", featured, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        );
        // Dropping `tx` on an early return rolls the article row back.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(content.as_str())
            .bind(i64::from(author_id))
            .bind(order)
            .bind(featured)
            .bind(status.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        for category_id in categories {
            sqlx::query(
                "INSERT OR IGNORE INTO article_category (article_id, category_id) VALUES (?, ?)",
            )
            .bind(row.id)
            .bind(i64::from(*category_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            name,
            slug,
            content,
            order,
            featured,
            expected_version,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE articles SET version = version + 1, updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(order) = order {
            builder.push(", \"order\" = ");
            builder.push_bind(order);
        }

        if let Some(featured) = featured {
            builder.push(", featured = ");
            builder.push_bind(featured);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND version = ");
        builder.push_bind(expected_version);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = maybe_row else {
            return Err(if article_exists(&self.pool, id).await? {
                DomainError::Conflict("article update conflict, please retry".into())
            } else {
                DomainError::NotFound("article not found".into())
            });
        };

        Article::try_from(row)
    }

    async fn apply_transition(&self, change: &StatusChange) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "UPDATE articles SET status = ?, updated_at = ?, version = version + 1
             WHERE id = ? AND status = ?
             RETURNING {ARTICLE_COLUMNS}"
        );
        let maybe_row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(change.to.as_str())
            .bind(change.changed_at)
            .bind(i64::from(change.article_id))
            .bind(change.from.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = maybe_row else {
            let exists = article_exists(&mut *tx, change.article_id).await?;
            tx.rollback().await.map_err(map_sqlx)?;
            return Err(if exists {
                DomainError::Conflict(format!(
                    "article is no longer {}, please retry",
                    change.from
                ))
            } else {
                DomainError::NotFound("article not found".into())
            });
        };

        sqlx::query(
            "INSERT INTO article_status_changes (article_id, from_status, to_status, changed_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(i64::from(change.article_id))
        .bind(change.from.as_str())
        .bind(change.to.as_str())
        .bind(change.changed_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }
}

/// Escape `LIKE` wildcards so the term is matched literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

impl SqliteArticleReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Sqlite>, listing: &ArticleListing) {
        let mut separator = " WHERE ";

        if let Some(status) = listing.status {
            builder.push(separator);
            builder.push("status = ");
            builder.push_bind(status.as_str());
            separator = " AND ";
        }

        if let Some(featured) = listing.featured {
            builder.push(separator);
            builder.push("featured = ");
            builder.push_bind(featured);
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Sqlite>, listing: &ArticleListing) {
        let direction = listing.sort.direction.keyword();
        builder.push(" ORDER BY ");
        builder.push(listing.sort.key.column());
        builder.push(" ");
        builder.push(direction);
        builder.push(", id ");
        builder.push(direction);
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<(Vec<Article>, bool)> {
        let limit = listing.limit.clamp(1, ArticleListing::MAX_LIMIT);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles");
        Self::apply_conditions(&mut builder, listing);
        Self::apply_ordering(&mut builder, listing);
        builder.push(" LIMIT ");
        builder.push_bind(fetch_limit);
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(listing.offset));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let has_more = articles.len() > limit as usize;
        articles.truncate(limit as usize);

        Ok((articles, has_more))
    }

    async fn search_published(&self, term: &str, limit: u32) -> DomainResult<Vec<Article>> {
        let pattern = like_pattern(term);
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE status = ?
               AND (name LIKE ? ESCAPE '\\' OR content LIKE ? ESCAPE '\\')
             ORDER BY \"order\" ASC, id ASC
             LIMIT ?"
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(ArticleStatus::Published.as_str())
            .bind(pattern.as_str())
            .bind(pattern.as_str())
            .bind(i64::from(limit.max(1)))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn status_history(&self, id: ArticleId) -> DomainResult<Vec<StatusChange>> {
        let rows = sqlx::query_as::<_, StatusChangeRow>(
            "SELECT article_id, from_status, to_status, changed_at
             FROM article_status_changes WHERE article_id = ? ORDER BY id ASC",
        )
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(StatusChange::try_from).collect()
    }
}
