// tests/support/builders.rs
use chrono::Utc;

use newsroom_core::application::dto::AuthenticatedUser;
use newsroom_core::domain::article::*;
use newsroom_core::domain::user::{EmailAddress, Role, RoleSet, User, UserId, Username};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    status: ArticleStatus,
    author_id: i64,
    category_id: Option<i64>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            body: "Test body".into(),
            status: ArticleStatus::Pending,
            author_id: 1,
            category_id: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Published;
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            image_ref: None,
            status: self.status,
            author_id: newsroom_core::domain::user::UserId::new(self.author_id).unwrap(),
            category_id: self
                .category_id
                .map(|id| newsroom_core::domain::category::CategoryId::new(id).unwrap()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

pub fn user(id: i64, username: &str, roles: &[Role]) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        display_name: format!("{username} display"),
        email: EmailAddress::new(format!("{username}@example.org")).unwrap(),
        roles: RoleSet::new(roles.iter().copied()),
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn actor(id: i64, username: &str, roles: &[Role]) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: username.to_string(),
        display_name: format!("{username} display"),
        email: format!("{username}@example.org"),
        roles: RoleSet::new(roles.iter().copied()),
    }
}
