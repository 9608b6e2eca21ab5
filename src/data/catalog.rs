//! Static catalog of advisor types and cities
//!
//! The directory generates one listing page per (advisor type, city) pair in
//! this catalog, so these tables also define the set of lookups a full cache
//! warm performs.

use super::{AdvisorType, City};

/// Advisor categories listed by the directory
pub static ADVISOR_TYPES: [AdvisorType; 5] = [
    AdvisorType {
        slug: "financial-advisors",
        name: "Financial Advisors",
    },
    AdvisorType {
        slug: "mortgage-advisors",
        name: "Mortgage Advisors",
    },
    AdvisorType {
        slug: "pension-advisors",
        name: "Pension Advisors",
    },
    AdvisorType {
        slug: "investment-advisors",
        name: "Investment Advisors",
    },
    AdvisorType {
        slug: "wealth-managers",
        name: "Wealth Managers",
    },
];

/// Cities with generated location pages
pub static CITIES: [City; 10] = [
    City {
        slug: "london",
        name: "London",
        county: "Greater London",
    },
    City {
        slug: "manchester",
        name: "Manchester",
        county: "Greater Manchester",
    },
    City {
        slug: "birmingham",
        name: "Birmingham",
        county: "West Midlands",
    },
    City {
        slug: "leeds",
        name: "Leeds",
        county: "West Yorkshire",
    },
    City {
        slug: "glasgow",
        name: "Glasgow",
        county: "Glasgow City",
    },
    City {
        slug: "liverpool",
        name: "Liverpool",
        county: "Merseyside",
    },
    City {
        slug: "bristol",
        name: "Bristol",
        county: "City of Bristol",
    },
    City {
        slug: "sheffield",
        name: "Sheffield",
        county: "South Yorkshire",
    },
    City {
        slug: "edinburgh",
        name: "Edinburgh",
        county: "City of Edinburgh",
    },
    City {
        slug: "cardiff",
        name: "Cardiff",
        county: "Cardiff",
    },
];

/// Returns all advisor types in display order
pub fn all_advisor_types() -> &'static [AdvisorType] {
    &ADVISOR_TYPES
}

/// Returns all cities in display order
pub fn all_cities() -> &'static [City] {
    &CITIES
}

/// Get an advisor type by its slug
pub fn advisor_type_by_slug(slug: &str) -> Option<&'static AdvisorType> {
    ADVISOR_TYPES.iter().find(|t| t.slug == slug)
}

/// Get a city by its slug
///
/// # Example
///
/// ```
/// use findanadvisor::data::catalog::city_by_slug;
///
/// if let Some(city) = city_by_slug("bristol") {
///     println!("Found: {}, {}", city.name, city.county);
/// }
/// ```
pub fn city_by_slug(slug: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.slug == slug)
}

/// Finds an advisor type by slug or display name, ignoring case and
/// surrounding whitespace
pub fn resolve_advisor_type(input: &str) -> Option<&'static AdvisorType> {
    let input = input.trim();
    ADVISOR_TYPES
        .iter()
        .find(|t| t.slug.eq_ignore_ascii_case(input) || t.name.eq_ignore_ascii_case(input))
}

/// Finds a city by slug or display name, ignoring case and surrounding whitespace
pub fn resolve_city(input: &str) -> Option<&'static City> {
    let input = input.trim();
    CITIES
        .iter()
        .find(|c| c.slug.eq_ignore_ascii_case(input) || c.name.eq_ignore_ascii_case(input))
}

/// Every (advisor type, city) pair, advisor type major
pub fn all_combinations() -> impl Iterator<Item = (&'static AdvisorType, &'static City)> {
    ADVISOR_TYPES
        .iter()
        .flat_map(|t| CITIES.iter().map(move |c| (t, c)))
}
