/**
 * Reports
 *
 * Owner-scoped report listing and generation. Content generation is a
 * stub: the handler assembles a fixed analysis summary synchronously and
 * stores the report as "completed".
 */

pub mod db;
pub mod handlers;

pub use handlers::{generate_report, get_reports};
