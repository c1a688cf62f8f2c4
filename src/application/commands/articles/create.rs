// src/application/commands/articles/create.rs
use std::str::FromStr;

use super::ArticleCommandService;
use crate::{
    application::{
        commands::ensure_can_author,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleBody, ArticleStatus, ArticleTitle, ImageRef, NewArticle, workflow},
        category::CategoryId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub image_ref: Option<String>,
    pub category_id: Option<i64>,
    pub status: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    image_ref: Option<String>,
    category_id: Option<i64>,
    status: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            image_ref: self.image_ref,
            category_id: self.category_id,
            status: self.status,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_can_author(actor)?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let image_ref = command.image_ref.map(ImageRef::new).transpose()?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;

        // Only editorial staff get to pick a status; a reporter's request
        // field is never even read, mirroring the reduced submission form.
        let requested = if actor.roles.is_editorial() {
            command
                .status
                .as_deref()
                .map(ArticleStatus::from_str)
                .transpose()?
        } else {
            None
        };
        let status = workflow::resolve_create_status(&actor.roles, requested);

        let now = self.clock.now();
        let slug = self.slug_service.derive_unique_slug(&title).await?;

        let new_article = NewArticle {
            title,
            slug,
            body,
            image_ref,
            status,
            author_id: actor.id,
            category_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
