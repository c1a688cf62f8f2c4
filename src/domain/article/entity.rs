// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, ImageRef,
};
use crate::domain::category::CategoryId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub image_ref: Option<ImageRef>,
    pub status: ArticleStatus,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn set_status(&mut self, status: ArticleStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }

    pub fn set_image(&mut self, image_ref: Option<ImageRef>, now: DateTime<Utc>) {
        self.image_ref = image_ref;
        self.updated_at = now;
    }

    pub fn set_category(&mut self, category_id: Option<CategoryId>, now: DateTime<Utc>) {
        self.category_id = category_id;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub image_ref: Option<ImageRef>,
    pub status: ArticleStatus,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update bound to the `updated_at` the caller last observed. The
/// store refuses to apply it when the row has moved on since.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub body: Option<ArticleBody>,
    pub image_ref: Option<Option<ImageRef>>,
    pub category_id: Option<Option<CategoryId>>,
    pub status: Option<ArticleStatus>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            image_ref: None,
            category_id: None,
            status: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_image_ref(mut self, image_ref: Option<ImageRef>) -> Self {
        self.image_ref = Some(image_ref);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            body: ArticleBody::new("body").unwrap(),
            image_ref: None,
            status: ArticleStatus::Pending,
            author_id: UserId::new(1).unwrap(),
            category_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn set_status_refreshes_updated_at() {
        let mut article = sample_article();
        let now = Utc::now() + chrono::Duration::seconds(10);
        article.set_status(ArticleStatus::Published, now);
        assert!(article.is_published());
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn set_content_updates_fields() {
        let mut article = sample_article();
        let now = Utc::now();
        let title = ArticleTitle::new("new title").unwrap();
        let body = ArticleBody::new("new body").unwrap();
        article.set_content(title.clone(), body.clone(), now);
        assert_eq!(article.title.as_str(), title.as_str());
        assert_eq!(article.body.as_str(), body.as_str());
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn set_category_can_clear_the_reference() {
        let mut article = sample_article();
        let now = Utc::now();
        article.set_category(Some(CategoryId::new(3).unwrap()), now);
        assert!(article.category_id.is_some());
        article.set_category(None, now);
        assert!(article.category_id.is_none());
    }
}
