//! Bearer token extractors

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;
use crate::infrastructure::account::RequestAccount;

/// Extractor that requires a valid `Authorization: Bearer <jwt>` header
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?.ok_or_else(|| {
            ApiError::unauthorized(
                "Authentication required. Provide a token via 'Authorization: Bearer <token>'",
            )
        })?;

        resolve_user(&token, state).await.map(RequireUser)
    }
}

/// The caller's account: anonymous without a token, rejected with a bad one
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub RequestAccount);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let account = match bearer_token(&parts.headers)? {
            Some(token) => RequestAccount::from(resolve_user(&token, state).await?),
            None => RequestAccount::anonymous(),
        };

        Ok(CurrentAccount(account))
    }
}

async fn resolve_user(token: &str, state: &AppState) -> Result<User, ApiError> {
    debug!("Validating bearer token");

    let claims = state.jwt_service.validate(token)?;

    state
        .user_service
        .get(claims.user_id())
        .await
        .map_err(|e| ApiError::unauthorized(format!("Invalid token subject: {}", e)))?
        .ok_or_else(|| ApiError::unauthorized("User not found"))
}

/// The bearer token, if an Authorization header is present
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    value
        .strip_prefix("Bearer ")
        .map(|token| Some(token.trim().to_string()))
        .ok_or_else(|| ApiError::unauthorized("Authorization header must use the Bearer scheme"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        let token = bearer_token(&headers_with("Bearer eyJhbGciOiJIUzI1NiJ9.test")).unwrap();
        assert_eq!(token.as_deref(), Some("eyJhbGciOiJIUzI1NiJ9.test"));
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        assert!(bearer_token(&HeaderMap::new()).unwrap().is_none());
    }

    #[test]
    fn test_other_scheme_rejected() {
        let err = bearer_token(&headers_with("Basic dXNlcjpwYXNz")).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_is_trimmed() {
        let token = bearer_token(&headers_with("Bearer   spaced-token   ")).unwrap();
        assert_eq!(token.as_deref(), Some("spaced-token"));
    }
}
