// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleSlug, specifications::CanDeleteArticleSpec},
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanDeleteArticleSpec::new(&actor.roles, &article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete article",
            ));
        }

        self.write_repo.delete(article.id).await?;
        Ok(())
    }
}
