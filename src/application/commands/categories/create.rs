use super::CategoryCommandService;
use crate::{
    application::{
        commands::ensure_editorial,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_editorial(actor)?;

        let name = CategoryName::new(command.name)?;
        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict("category name already exists"));
        }

        let description = command
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let created = self.repo.insert(NewCategory { name, description }).await?;
        Ok(created.into())
    }
}
