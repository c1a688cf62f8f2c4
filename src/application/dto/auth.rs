use crate::domain::user::{RoleSet, UserId};

/// The acting principal, resolved from an already-issued token. Passed
/// explicitly into every command and query instead of living in ambient
/// request state.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub roles: RoleSet,
}
