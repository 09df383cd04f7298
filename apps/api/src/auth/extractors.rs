use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::claims::Role;
use crate::auth::jwt::JwtKeys;
use crate::errors::AppError;

/// The authenticated caller, extracted from the `Authorization: Bearer`
/// header on every protected route. Missing header rejects with 401 before
/// the handler runs; a bad or expired token rejects with 403.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

impl Identity {
    /// Role policy check. Handlers state the required role and the denial
    /// message once, instead of comparing strings inline.
    pub fn require(&self, role: Role, denied: &str) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::Forbidden(denied.to_string()))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::InvalidToken)?;

        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            AppError::InvalidToken
        })?;

        Ok(Identity {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_passes_matching_role() {
        let identity = Identity {
            user_id: Uuid::new_v4(),
            role: Role::Student,
        };
        assert!(identity
            .require(Role::Student, "Only students can complete onboarding")
            .is_ok());
    }

    #[test]
    fn require_rejects_other_role_with_given_message() {
        let identity = Identity {
            user_id: Uuid::new_v4(),
            role: Role::Professional,
        };
        let err = identity
            .require(Role::Student, "Only students can access matches")
            .unwrap_err();
        match err {
            AppError::Forbidden(msg) => assert_eq!(msg, "Only students can access matches"),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }
}
