/**
 * Authentication Handlers
 *
 * Register, login, and current-user handlers, plus the auth cookie
 * builder shared by the first two.
 */

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;

use crate::backend::auth::sessions::TOKEN_TTL_SECS;
use crate::backend::middleware::AUTH_COOKIE;

/// Build the `Set-Cookie` value for a freshly issued token.
///
/// HTTP-only, same-site strict, max-age equal to the token lifetime;
/// `Secure` in production only so local HTTP development keeps working.
pub(crate) fn auth_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{AUTH_COOKIE}={token}; HttpOnly; SameSite=Strict; Path=/; Max-Age={TOKEN_TTL_SECS}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_attributes() {
        let cookie = auth_cookie("tok123", false);
        assert!(cookie.starts_with("auth-token=tok123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_flag_in_production() {
        let cookie = auth_cookie("tok123", true);
        assert!(cookie.ends_with("; Secure"));
    }
}
