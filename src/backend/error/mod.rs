/**
 * Backend Error Types
 *
 * `BackendError` is the single error type returned by handlers. The
 * `IntoResponse` conversion in `conversion.rs` turns it into the
 * `{"error": message}` JSON body the client access layer parses.
 */

pub mod conversion;
pub mod types;

pub use types::BackendError;
