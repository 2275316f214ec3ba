/**
 * Areas of Interest
 *
 * CRUD for user-defined monitoring regions. Listings carry aggregated
 * lake statistics; updates and deletes are owner-scoped.
 */

pub mod db;
pub mod handlers;

pub use handlers::{create_aoi, delete_aoi, get_aois, update_aoi};
