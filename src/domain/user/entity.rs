// src/domain/user/entity.rs
use crate::domain::user::value_objects::{EmailAddress, RoleSet, UserId, Username};
use chrono::{DateTime, Utc};

/// A newsroom account. Registration, credentials, and sessions live in the
/// identity service; this record only carries what the workflow needs.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub display_name: String,
    pub email: EmailAddress,
    pub roles: RoleSet,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name to greet the author with in outbound mail.
    pub fn display_name_or_username(&self) -> &str {
        if self.display_name.trim().is_empty() {
            self.username.as_str()
        } else {
            &self.display_name
        }
    }
}
