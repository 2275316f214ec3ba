/**
 * Alerts
 *
 * Listing with status/type filters and alert creation. Alerts are shared
 * across users rather than owner-scoped; any authenticated identity sees
 * the full feed for its deployment.
 */

pub mod db;
pub mod handlers;

pub use handlers::{create_alert, get_alerts};
