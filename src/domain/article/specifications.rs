use crate::domain::article::entity::Article;
use crate::domain::user::{RoleSet, UserId};

/// Editorial staff edit anything; a reporter edits only their own work.
pub struct CanEditArticleSpec<'a> {
    roles: &'a RoleSet,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanEditArticleSpec<'a> {
    pub fn new(roles: &'a RoleSet, article: &'a Article, user_id: UserId) -> Self {
        Self {
            roles,
            article,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.roles.is_editorial()
            || (self.roles.is_reporter() && self.article.author_id == self.user_id)
    }
}

/// Same ownership rule as editing: the original author or editorial staff.
pub struct CanDeleteArticleSpec<'a> {
    roles: &'a RoleSet,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub fn new(roles: &'a RoleSet, article: &'a Article, user_id: UserId) -> Self {
        Self {
            roles,
            article,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.roles.is_editorial()
            || (self.roles.is_reporter() && self.article.author_id == self.user_id)
    }
}
