use crate::domain::article::{Article, ImageRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    pub status: String,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            body: article.body.into_inner(),
            image_ref: article.image_ref.map(ImageRef::into_inner),
            status: article.status.as_str().to_string(),
            author_id: article.author_id.into(),
            category_id: article.category_id.map(Into::into),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
