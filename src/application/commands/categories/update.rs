use super::CategoryCommandService;
use crate::{
    application::{
        commands::ensure_editorial,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_editorial(actor)?;

        let id = CategoryId::new(command.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let mut update = CategoryUpdate::new(id);
        if let Some(name) = command.name {
            update = update.with_name(CategoryName::new(name)?);
        }
        if let Some(description) = command.description {
            let description = description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty());
            update = update.with_description(description);
        }

        let updated = self.repo.update(update).await?;
        Ok(updated.into())
    }
}
