//! Core data models for the advisor directory
//!
//! This module contains the advisor record returned to page generators, the
//! static catalog of cities and advisor types, the mock fallback, and the
//! places-search client that ties them together.

pub mod catalog;
pub mod mock;
pub mod places;

pub use catalog::{
    advisor_type_by_slug, all_advisor_types, all_cities, all_combinations, city_by_slug,
    resolve_advisor_type, resolve_city,
};
pub use mock::generate_mock_advisors;
pub use places::{AdvisorClient, PlaceResult, PlacesError, SearchOutcome};

use serde::{Deserialize, Serialize};

/// Normalized listing for one advisor business or professional
///
/// Every field is populated: values missing upstream are replaced with
/// defaults during normalization, never left absent. `phone` is the only
/// optional field and is omitted from serialized output when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorRecord {
    /// Identifier, unique within one fetch response
    pub id: String,
    /// Display name
    pub title: String,
    /// Average rating between 0 and 5
    pub rating: f64,
    /// Number of reviews behind the rating
    pub reviews: u64,
    /// Free-text address, possibly empty
    pub address: String,
    /// Contact number, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Advisor category
    pub category: String,
    /// Website URL, or `"#"` when there is none
    pub link: String,
}

/// A UK city the directory generates pages for
///
/// Uses `&'static str` fields so the catalog can be initialized statically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    /// URL slug (e.g., "manchester")
    pub slug: &'static str,
    /// Display name
    pub name: &'static str,
    /// County or administrative area
    pub county: &'static str,
}

/// A category of advisor the directory lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvisorType {
    /// URL slug (e.g., "mortgage-advisors")
    pub slug: &'static str,
    /// Display name, also used as the search term
    pub name: &'static str,
}
