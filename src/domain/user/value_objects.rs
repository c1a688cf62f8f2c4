// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Named role memberships mirrored from the newsroom's staff groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Reporter,
    Moderator,
    Subscriber,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Reporter => "reporter",
            Role::Moderator => "moderator",
            Role::Subscriber => "subscriber",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "reporter" => Ok(Role::Reporter),
            "moderator" => Ok(Role::Moderator),
            "subscriber" => Ok(Role::Subscriber),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

/// The resolved role memberships of one principal.
///
/// An empty set is the guest case: every check except `is_guest` answers
/// `false`. Membership names that no longer map to a known role are simply
/// skipped during resolution, so a stale group row can never grant access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(HashSet<Role>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    /// Resolve stored membership names into roles, ignoring unknown names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .filter_map(|name| Role::from_str(name.as_ref()).ok())
                .collect(),
        )
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.contains(Role::Admin)
    }

    pub fn is_editor(&self) -> bool {
        self.contains(Role::Editor)
    }

    pub fn is_reporter(&self) -> bool {
        self.contains(Role::Reporter)
    }

    pub fn is_moderator(&self) -> bool {
        self.contains(Role::Moderator)
    }

    pub fn is_subscriber(&self) -> bool {
        self.contains(Role::Subscriber)
    }

    pub fn is_guest(&self) -> bool {
        self.0.is_empty()
    }

    /// Admin, Editor, or Reporter: the roles allowed to submit articles.
    pub fn can_author(&self) -> bool {
        self.is_admin() || self.is_editor() || self.is_reporter()
    }

    /// Admin or Editor: the roles that review submissions, set status
    /// directly, and manage categories.
    pub fn is_editorial(&self) -> bool {
        self.is_admin() || self.is_editor()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if value.len() < 3 {
            return Err(DomainError::Validation(
                "username must be at least 3 characters long".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.contains('@') {
            return Err(DomainError::Validation(format!(
                "'{trimmed}' is not a valid email address"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_set_resolves_known_names_and_skips_unknown() {
        let roles = RoleSet::from_names(["editor", "Reviewer", "subscriber", ""]);
        assert!(roles.is_editor());
        assert!(roles.is_subscriber());
        assert!(!roles.is_admin());
        assert!(!roles.is_guest());
    }

    #[test]
    fn empty_role_set_is_guest_only() {
        let roles = RoleSet::default();
        assert!(roles.is_guest());
        assert!(!roles.can_author());
        assert!(!roles.is_editorial());
        assert!(!roles.is_moderator());
    }

    #[test]
    fn composites_cover_the_expected_roles() {
        assert!(RoleSet::new([Role::Reporter]).can_author());
        assert!(!RoleSet::new([Role::Reporter]).is_editorial());
        assert!(RoleSet::new([Role::Editor]).is_editorial());
        assert!(RoleSet::new([Role::Admin]).can_author());
        assert!(!RoleSet::new([Role::Moderator, Role::Subscriber]).can_author());
    }

    #[test]
    fn email_address_requires_an_at_sign() {
        assert!(EmailAddress::new("newsdesk.example.org").is_err());
        assert_eq!(
            EmailAddress::new("  reporter@example.org ").unwrap().as_str(),
            "reporter@example.org"
        );
    }
}
