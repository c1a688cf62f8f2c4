use std::str::FromStr;

use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            Article, ArticleBody, ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate,
            ImageRef,
            specifications::CanEditArticleSpec,
            workflow::{self, StatusChange},
        },
        category::CategoryId,
    },
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub body: Option<String>,
    /// `Some(None)` clears the image, `None` leaves it untouched.
    pub image_ref: Option<Option<String>>,
    /// `Some(None)` files the article under no category.
    pub category_id: Option<Option<i64>>,
    pub status: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let mut article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanEditArticleSpec::new(&actor.roles, &article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update article",
            ));
        }

        let UpdateArticleCommand {
            slug: _,
            title,
            body,
            image_ref,
            category_id,
            status,
        } = command;

        let mut update = ArticleUpdate::new(article.id, article.updated_at);

        let title_opt = title.map(ArticleTitle::new).transpose()?;
        let body_opt = body.map(ArticleBody::new).transpose()?;
        update = self.apply_content_updates(&mut article, title_opt, body_opt, update);

        if let Some(image_ref) = image_ref {
            let image_ref = image_ref.map(ImageRef::new).transpose()?;
            article.set_image(image_ref.clone(), self.clock.now());
            update = update.with_image_ref(image_ref);
            update.set_updated_at(article.updated_at);
        }

        if let Some(category_id) = category_id {
            let category_id = category_id.map(CategoryId::new).transpose()?;
            article.set_category(category_id, self.clock.now());
            update = update.with_category(category_id);
            update.set_updated_at(article.updated_at);
        }

        let (update, change) = self.apply_status_resolution(actor, &mut article, status, update)?;

        let updated = self.write_repo.update(update).await?;
        if change.became_published() {
            self.dispatch_publication_notice(&updated).await;
        }
        Ok(updated.into())
    }

    fn apply_content_updates(
        &self,
        article: &mut Article,
        title_opt: Option<ArticleTitle>,
        body_opt: Option<ArticleBody>,
        mut update: ArticleUpdate,
    ) -> ArticleUpdate {
        if title_opt.is_none() && body_opt.is_none() {
            return update;
        }

        let now = self.clock.now();
        let new_title = title_opt.unwrap_or_else(|| article.title.clone());
        let new_body = body_opt.unwrap_or_else(|| article.body.clone());
        // The slug stays what it was at first save; title edits never
        // regenerate it.
        article.set_content(new_title.clone(), new_body.clone(), now);
        update = update.with_title(new_title).with_body(new_body);
        update.set_updated_at(article.updated_at);
        update
    }

    /// Every edit re-resolves the effective status: an editorial request is
    /// honored, a reporter edit is demoted back to pending.
    fn apply_status_resolution(
        &self,
        actor: &AuthenticatedUser,
        article: &mut Article,
        requested: Option<String>,
        mut update: ArticleUpdate,
    ) -> ApplicationResult<(ArticleUpdate, StatusChange)> {
        let requested = if actor.roles.is_editorial() {
            requested
                .as_deref()
                .map(ArticleStatus::from_str)
                .transpose()?
        } else {
            None
        };

        let current = article.status;
        let resolved = workflow::resolve_edit_status(&actor.roles, current, requested);
        if resolved != current {
            article.set_status(resolved, self.clock.now());
            update = update.with_status(resolved);
            update.set_updated_at(article.updated_at);
        }

        Ok((update, StatusChange::new(current, resolved)))
    }
}
