// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::CategoryDto,
    queries::categories::GetCategoryQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use utoipa::ToSchema;

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Every category, alphabetically.", body = [CategoryDto])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "No category with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category(GetCategoryQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "The created category.", body = CategoryDto),
        (status = 403, description = "Caller lacks an editorial role.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "A category with that name already exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .create_category(
            &user,
            CreateCategoryCommand {
                name: payload.name,
                description: payload.description,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "The updated category.", body = CategoryDto),
        (status = 403, description = "Caller lacks an editorial role.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No category with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .update_category(
            &user,
            UpdateCategoryCommand {
                id,
                name: payload.name,
                description: payload.description,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category was deleted; its articles keep their rows."),
        (status = 403, description = "Caller lacks an editorial role.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No category with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .category_commands
        .delete_category(&user, DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
