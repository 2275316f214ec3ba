/**
 * Glacial Lakes
 *
 * Listing with an optional AOI filter, and lake registration. Lakes feed
 * the per-AOI statistics computed by the AOI listing query.
 */

pub mod db;
pub mod handlers;

pub use handlers::{create_glacial_lake, get_glacial_lakes};
