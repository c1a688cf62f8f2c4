// src/infrastructure/security/principal.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::auth::PrincipalResolver,
};
use crate::domain::user::{RoleSet, UserId};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Looks an opaque bearer token up in the store the identity service
/// writes to. Issuance, rotation, and revocation all happen over there;
/// an unknown or deactivated token is simply unauthorized here.
#[derive(Clone)]
pub struct PostgresPrincipalResolver {
    pool: PgPool,
}

impl PostgresPrincipalResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PrincipalRow {
    user_id: i64,
    username: String,
    display_name: String,
    email: String,
    roles: Vec<String>,
    is_active: bool,
}

#[async_trait]
impl PrincipalResolver for PostgresPrincipalResolver {
    async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            "SELECT u.id AS user_id, u.username, u.display_name, u.email,
                    COALESCE(array_agg(ur.role) FILTER (WHERE ur.role IS NOT NULL), '{}') AS roles,
                    u.is_active
             FROM api_tokens t
             JOIN users u ON u.id = t.user_id
             LEFT JOIN user_roles ur ON ur.user_id = u.id
             WHERE t.token = $1
             GROUP BY u.id",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| ApplicationError::from(map_sqlx(err)))?
        .ok_or_else(|| ApplicationError::unauthorized("invalid or expired token"))?;

        if !row.is_active {
            return Err(ApplicationError::unauthorized("account is deactivated"));
        }

        Ok(AuthenticatedUser {
            id: UserId::new(row.user_id)?,
            username: row.username,
            display_name: row.display_name,
            email: row.email,
            roles: RoleSet::from_names(row.roles),
        })
    }
}
