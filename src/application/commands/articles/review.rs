// src/application/commands/articles/review.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::ensure_editorial,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleStatus, ArticleUpdate, workflow},
};

pub struct ApproveArticleCommand {
    pub id: i64,
}

pub struct RejectArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Promote a pending submission to published and tell its author.
    /// Approving anything that is not pending reads as `NotFound`.
    pub async fn approve_article(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_editorial(actor)?;
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        workflow::ensure_pending(&article)?;

        let original_updated_at = article.updated_at;
        article.set_status(ArticleStatus::Published, self.clock.now());

        let mut update =
            ArticleUpdate::new(id, original_updated_at).with_status(ArticleStatus::Published);
        update.set_updated_at(article.updated_at);

        let updated = self.write_repo.update(update).await?;
        self.dispatch_publication_notice(&updated).await;
        Ok(updated.into())
    }

    /// A rejection is destructive: the submission is deleted outright
    /// rather than parked in some rejected state.
    pub async fn reject_article(
        &self,
        actor: &AuthenticatedUser,
        command: RejectArticleCommand,
    ) -> ApplicationResult<()> {
        ensure_editorial(actor)?;
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        workflow::ensure_pending(&article)?;

        self.write_repo.delete(article.id).await?;
        Ok(())
    }
}
