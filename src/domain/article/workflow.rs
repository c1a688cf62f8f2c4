//! Review workflow rules for article status.
//!
//! `published` is not terminal: a reporter re-editing their own article
//! demotes it back to `pending`, so every mutation path resolves the
//! effective status here instead of trusting the requested one.

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::RoleSet;

/// Status movement produced by one mutation, used to decide whether the
/// publication notification fires. It fires on the edge into `published`
/// only, never on saves that stay there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: ArticleStatus,
    pub to: ArticleStatus,
}

impl StatusChange {
    pub fn new(from: ArticleStatus, to: ArticleStatus) -> Self {
        Self { from, to }
    }

    pub fn became_published(&self) -> bool {
        !self.from.is_published() && self.to.is_published()
    }
}

/// Status a freshly created article takes. Editorial staff may publish
/// outright; everyone else lands in the review queue no matter what status
/// the request carried.
pub fn resolve_create_status(roles: &RoleSet, requested: Option<ArticleStatus>) -> ArticleStatus {
    if roles.is_editorial() {
        requested.unwrap_or_default()
    } else {
        ArticleStatus::Pending
    }
}

/// Status an edited article takes. A reporter's edit always goes back
/// through review, even when the article was already published.
pub fn resolve_edit_status(
    roles: &RoleSet,
    current: ArticleStatus,
    requested: Option<ArticleStatus>,
) -> ArticleStatus {
    if roles.is_editorial() {
        requested.unwrap_or(current)
    } else {
        ArticleStatus::Pending
    }
}

/// Guard for approve/reject: both are defined on `pending` articles only.
/// Anything else reads as "no pending article with that id", matching the
/// lookup the review screens perform.
pub fn ensure_pending(article: &Article) -> DomainResult<()> {
    if article.is_pending() {
        Ok(())
    } else {
        Err(DomainError::NotFound(
            "no pending article with that id".into(),
        ))
    }
}
