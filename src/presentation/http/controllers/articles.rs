// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, CursorPage},
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    20
}

/// Distinguishes an absent field from an explicit `null`, so a PUT can
/// clear the image or category without a dedicated endpoint.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListParams {
    /// Restrict the page to one category.
    #[serde(default)]
    pub category: Option<i64>,
    /// Include unreviewed submissions; editorial roles only.
    #[serde(default)]
    pub include_pending: bool,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Honored for admin/editor callers only; reporters always land in
    /// the review queue.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_ref: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<i64>>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles, newest first.", body = crate::presentation::http::openapi::ArticleListResponse),
        (status = 403, description = "Pending listing requested without an editorial role.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<CursorPage<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(
            actor.0.as_ref(),
            ListArticlesQuery {
                include_pending: params.include_pending,
                category_id: params.category,
                limit: params.limit,
                cursor: params.cursor,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "Unknown slug, or a pending article the caller may not see.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(actor.0.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "The created article.", body = ArticleDto),
        (status = 403, description = "Caller may not author articles.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        image_ref: payload.image_ref,
        category_id: payload.category_id,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "The updated article.", body = ArticleDto),
        (status = 403, description = "Caller may not edit this article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        slug,
        title: payload.title,
        body: payload.body,
        image_ref: payload.image_ref,
        category_id: payload.category_id,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article was deleted."),
        (status = 403, description = "Caller may not delete this article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { slug })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
