/**
 * Authentication Middleware
 *
 * Credential verification for protected routes. The token is read from
 * the `auth-token` cookie first, then from the `Authorization: Bearer`
 * header for non-browser and cross-origin clients.
 *
 * Verification never raises: a missing, expired or tampered token is an
 * absence of identity. The middleware turns that absence into a 401
 * before any handler runs; handlers receive `AuthenticatedUser` through
 * request extensions.
 */

use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::backend::auth::sessions::{verify_token, JwtKeys};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Name of the HTTP-only auth cookie.
pub const AUTH_COOKIE: &str = "auth-token";

/// Authenticated identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Pull the bearer token out of the request headers: cookie first,
/// Authorization header as the fallback.
fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(cookies) = headers.get(COOKIE).and_then(|v| v.to_str().ok()) {
        for pair in cookies.split(';') {
            let value = pair
                .trim()
                .strip_prefix(AUTH_COOKIE)
                .and_then(|rest| rest.strip_prefix('='));
            if let Some(value) = value {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Decide whether a request is authenticated.
///
/// `None` means unauthenticated - no token anywhere, or a token that
/// failed verification. This is a decision, not an error.
pub fn authenticate(keys: &JwtKeys, headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let token = token_from_headers(headers)?;
    let claims = verify_token(keys, &token)?;
    let user_id = Uuid::parse_str(&claims.sub).ok()?;
    Some(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

/// Authentication middleware
///
/// Every protected route runs this first; requests without a verified
/// identity short-circuit with 401.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(&app_state.jwt, request.headers()) {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => {
            tracing::warn!("Unauthenticated request to {}", request.uri().path());
            BackendError::unauthorized("Unauthorized").into_response()
        }
    }
}

/// Axum extractor for the authenticated user set by `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                BackendError::unauthorized("Unauthorized")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::issue_token;
    use axum::http::HeaderValue;

    fn keys() -> JwtKeys {
        JwtKeys::new("middleware-test-secret")
    }

    #[test]
    fn test_no_token_is_unauthenticated() {
        let headers = HeaderMap::new();
        assert!(authenticate(&keys(), &headers).is_none());
    }

    #[test]
    fn test_bearer_header_accepted() {
        let keys = keys();
        let user_id = Uuid::new_v4();
        let token = issue_token(&keys, user_id, "user@example.com").unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let user = authenticate(&keys, &headers).expect("should authenticate");
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "user@example.com");
    }

    #[test]
    fn test_cookie_preferred_over_header() {
        let keys = keys();
        let cookie_id = Uuid::new_v4();
        let header_id = Uuid::new_v4();
        let cookie_token = issue_token(&keys, cookie_id, "cookie@example.com").unwrap();
        let header_token = issue_token(&keys, header_id, "header@example.com").unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; auth-token={cookie_token}")).unwrap(),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {header_token}")).unwrap(),
        );

        let user = authenticate(&keys, &headers).unwrap();
        assert_eq!(user.user_id, cookie_id);
    }

    #[test]
    fn test_invalid_token_is_unauthenticated_not_error() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer garbage"));
        assert!(authenticate(&keys(), &headers).is_none());
    }

    #[test]
    fn test_similarly_named_cookie_ignored() {
        let keys = keys();
        let token = issue_token(&keys, Uuid::new_v4(), "user@example.com").unwrap();

        // Only an exact name match counts, not a shared prefix
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("auth-token-backup={token}")).unwrap(),
        );
        assert!(authenticate(&keys, &headers).is_none());
    }

    #[test]
    fn test_malformed_authorization_scheme_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert!(authenticate(&keys(), &headers).is_none());
    }
}
