// src/application/commands/access.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

/// Admin, Editor, or Reporter may submit articles.
pub(crate) fn ensure_can_author(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.roles.can_author() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "authoring requires the admin, editor, or reporter role",
        ))
    }
}

/// Review decisions and category management are editorial-only.
pub(crate) fn ensure_editorial(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.roles.is_editorial() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "this action requires the admin or editor role",
        ))
    }
}
