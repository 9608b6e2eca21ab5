//! FindAnAdvisor directory data layer
//!
//! Cached, fallback-safe advisor listings from a places-search API, the static
//! catalog of directory pages, and schema.org generators over the results.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod schema;
