/**
 * Client Error Taxonomy
 *
 * Every failure from the access layer is one of these kinds. Callers
 * pattern-match on the variant, never on message strings.
 *
 * # Availability vs. rejection
 *
 * `ServerError`, `EndpointNotFound` and `NetworkError` mean the backend is
 * unreachable or erroring; the access layer resolves these into fallback
 * data for the resource operations, and the auth controller may apply the
 * demo-credential bypass. `AuthRequired`, `Api` and `Validation` are
 * well-formed rejections and always propagate.
 */

use thiserror::Error;

/// Error kinds produced by the API access layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 401; the session store has been cleared.
    #[error("authentication required")]
    AuthRequired,

    /// The backend answered with a 5xx status.
    #[error("server error")]
    ServerError,

    /// The route does not exist on the backend (404).
    #[error("endpoint not found")]
    EndpointNotFound,

    /// No response was obtained at all (connection refused, DNS, timeout).
    #[error("network error")]
    NetworkError,

    /// Malformed input rejected by the backend (400/422).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Any other non-2xx rejection, carrying the server-supplied message
    /// when present, else `HTTP <status>`.
    #[error("{0}")]
    Api(String),
}

impl ApiError {
    /// Whether this kind signals backend unavailability rather than a
    /// well-formed rejection.
    pub fn is_availability(&self) -> bool {
        matches!(
            self,
            ApiError::ServerError | ApiError::EndpointNotFound | ApiError::NetworkError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_classification() {
        assert!(ApiError::ServerError.is_availability());
        assert!(ApiError::EndpointNotFound.is_availability());
        assert!(ApiError::NetworkError.is_availability());
        assert!(!ApiError::AuthRequired.is_availability());
        assert!(!ApiError::Api("HTTP 418".to_string()).is_availability());
        assert!(!ApiError::Validation("email taken".to_string()).is_availability());
    }
}
