use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use types::ids::IdentityId;

/// Session-token claims issued by the identity-verification collaborator.
/// The gateway only decodes and validates; it never issues tokens itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub identity_id: IdentityId,
}

/// A request-scoped verified identity
pub struct AuthenticatedUser {
    pub identity: IdentityId,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get("Authorization") else {
            return Err(AppError::Unauthorized(
                "Missing authentication credentials".to_string(),
            ));
        };

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid header string".into()))?;
        let Some(token) = auth_str.strip_prefix("Bearer ") else {
            return Err(AppError::Unauthorized(
                "Expected a Bearer token".to_string(),
            ));
        };

        let key = DecodingKey::from_secret(state.config.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &key, &Validation::default())
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthenticatedUser {
            identity: token_data.claims.identity_id,
        })
    }
}
