use super::CategoryCommandService;
use crate::{
    application::{
        commands::ensure_editorial,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Removes the grouping only; articles filed under it stay, with their
    /// category reference nulled by the store.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        ensure_editorial(actor)?;

        let id = CategoryId::new(command.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.repo.delete(id).await?;
        Ok(())
    }
}
