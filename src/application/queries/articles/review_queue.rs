use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

impl ArticleQueryService {
    /// Pending submissions awaiting an editorial decision, oldest first.
    pub async fn review_queue(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if !actor.roles.is_editorial() {
            return Err(ApplicationError::forbidden(
                "the review queue requires the admin or editor role",
            ));
        }

        let pending = self.read_repo.list_pending().await?;
        Ok(pending.into_iter().map(Into::into).collect())
    }
}
