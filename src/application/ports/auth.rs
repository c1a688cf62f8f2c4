// src/application/ports/auth.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};
use async_trait::async_trait;

/// Maps an opaque bearer token to the acting principal. Token issuance is
/// the identity service's business; this side only looks tokens up.
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
