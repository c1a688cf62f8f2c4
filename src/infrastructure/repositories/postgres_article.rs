// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleListCursor, ArticleReadRepository, ArticleSlug,
    ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, ImageRef, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str =
    "id, title, slug, body, image_ref, status, author_id, category_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    image_ref: Option<String>,
    status: String,
    author_id: i64,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body)?,
            image_ref: row.image_ref.map(ImageRef::new).transpose()?,
            status: row.status.parse::<ArticleStatus>()?,
            author_id: UserId::new(row.author_id)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            body,
            image_ref,
            status,
            author_id,
            category_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, slug, body, image_ref, status, author_id, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, title, slug, body, image_ref, status, author_id, category_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body.as_str())
        .bind(image_ref.map(ImageRef::into_inner))
        .bind(status.as_str())
        .bind(i64::from(author_id))
        .bind(category_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            body,
            image_ref,
            category_id,
            status,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(String::from(body));
        }

        if let Some(image_ref) = image_ref {
            builder.push(", image_ref = ");
            builder.push_bind(image_ref.map(ImageRef::into_inner));
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(i64::from));
        }

        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(
            " RETURNING id, title, slug, body, image_ref, status, author_id, category_id, created_at, updated_at",
        );

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_conditions<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        include_pending: bool,
        category: Option<&'a CategoryId>,
        cursor: Option<&'a ArticleListCursor>,
    ) {
        let mut has_where = false;
        if !include_pending {
            builder.push(" WHERE status = ");
            builder.push_bind(ArticleStatus::Published.as_str());
            has_where = true;
        }

        if let Some(category) = category {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
            builder.push("category_id = ");
            builder.push_bind(i64::from(*category));
        }

        if let Some(cursor) = cursor {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("(created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.article_id));
            builder.push(")");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        include_pending: bool,
        category: Option<CategoryId>,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_conditions(
            &mut builder,
            include_pending,
            category.as_ref(),
            cursor.as_ref(),
        );
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if articles.len() > limit as usize {
            articles.pop();
            if let Some(last) = articles.last() {
                next_cursor = Some(ArticleListCursor::from_parts(last.created_at, last.id));
            }
        }

        Ok((articles, next_cursor))
    }

    async fn list_pending(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE status = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(ArticleStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
