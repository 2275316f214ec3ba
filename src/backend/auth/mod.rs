/**
 * Authentication
 *
 * Token issue/verify, user records, and the register/login/me handlers.
 */

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{login, me, register};
