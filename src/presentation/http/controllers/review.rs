// src/presentation/http/controllers/review.rs
use crate::application::{
    commands::articles::{ApproveArticleCommand, RejectArticleCommand},
    dto::ArticleDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/v1/review/queue",
    responses(
        (status = 200, description = "Pending submissions, oldest first.", body = [ArticleDto]),
        (status = 403, description = "Caller lacks an editorial role.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Review"
)]
pub async fn review_queue(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .review_queue(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/review/{id}/approve",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article is now published.", body = ArticleDto),
        (status = 403, description = "Caller lacks an editorial role.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No pending article with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Review"
)]
pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .approve_article(&user, ApproveArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/review/{id}/reject",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The submission was rejected and deleted."),
        (status = 403, description = "Caller lacks an editorial role.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No pending article with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Review"
)]
pub async fn reject_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .reject_article(&user, RejectArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "rejected" })))
}
