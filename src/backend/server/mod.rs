/**
 * Server Infrastructure
 *
 * Configuration loading, application state, and router assembly.
 */

pub mod config;
pub mod init;
pub mod state;
