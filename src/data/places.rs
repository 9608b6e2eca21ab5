//! Places-search client for advisor listings
//!
//! Queries the Serper places API for advisors of a given type in a location,
//! normalizes the loosely typed response into `AdvisorRecord`s, and resolves
//! every failure mode (no key, HTTP error, timeout, empty or malformed
//! response) to the deterministic mock listings. Results are cached per
//! (advisor type, location).

use std::convert::Infallible;

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{generate_mock_advisors, AdvisorRecord};
use crate::cache::CacheManager;
use crate::config::ClientConfig;

/// Header carrying the API key
const API_KEY_HEADER: &str = "X-API-KEY";

/// Highest rating the directory displays
const MAX_RATING: f64 = 5.0;

/// Errors that can occur when querying the places API
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// HTTP request failed or timed out
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("HTTP error status: {0}")]
    Status(u16),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What a single upstream lookup produced, before the fallback decision
#[derive(Debug)]
pub enum SearchOutcome {
    /// Normalized listings from a successful response
    Found(Vec<AdvisorRecord>),
    /// The response parsed but held no places
    EmptyUpstream,
    /// The request failed, timed out, or returned something unusable
    TransportError(PlacesError),
    /// No API key is configured
    NoCredential,
}

/// Request body for the places endpoint
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: String,
    location: String,
    gl: &'a str,
    hl: &'a str,
}

/// Places endpoint response; only the `places` array is used
#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    places: Option<Vec<Value>>,
}

impl PlacesResponse {
    /// Parses each place on its own; entries that are not objects are dropped
    fn into_places(self) -> Vec<PlaceResult> {
        self.places
            .unwrap_or_default()
            .into_iter()
            .filter_map(|place| serde_json::from_value(place).ok())
            .collect()
    }
}

/// A single place from the API, every field optional
///
/// Fields of an unexpected JSON type read as `None` instead of failing the
/// whole response. Numbers given as strings (`"4.2"`, `"1,024"`) are parsed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reviews: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,
}

/// Reads a string, or a number as its decimal text; anything else is `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads a number, or a string holding one (thousands separators allowed)
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    })
}

/// Client for fetching advisor listings, with a per-query cache
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key; lookups fall back to mock listings without one
    api_key: Option<String>,
    /// Places endpoint URL (overridable for testing)
    endpoint: String,
    /// Cached listings keyed by query
    cache: CacheManager<Vec<AdvisorRecord>>,
}

impl AdvisorClient {
    /// Creates a client with its own cache
    ///
    /// # Returns
    /// * `Err(PlacesError::Client)` if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, PlacesError> {
        let cache = CacheManager::new(config.cache_ttl);
        Self::with_cache(config, cache)
    }

    /// Creates a client that stores listings in an existing cache
    ///
    /// The cache's own TTL applies; `config.cache_ttl` is ignored.
    pub fn with_cache(
        config: ClientConfig,
        cache: CacheManager<Vec<AdvisorRecord>>,
    ) -> Result<Self, PlacesError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PlacesError::Client)?;

        Ok(Self {
            http_client,
            api_key: config.api_key,
            endpoint: config.endpoint,
            cache,
        })
    }

    /// The cache backing this client
    pub fn cache(&self) -> &CacheManager<Vec<AdvisorRecord>> {
        &self.cache
    }

    /// Generates a cache key for a query
    pub fn cache_key(advisor_type: &str, location: &str) -> String {
        format!("advisors-{advisor_type}-{location}")
    }

    /// Fetches advisor listings for a type and location
    ///
    /// # Arguments
    /// * `advisor_type` - Display name of the category (e.g., "Financial Advisors")
    /// * `location` - Display name of the place (e.g., "Manchester")
    ///
    /// # Behavior
    /// - Returns the cached listings if a fresh entry exists
    /// - Otherwise performs one upstream lookup and caches its resolved result
    /// - Never fails: any upstream problem yields the three mock listings
    pub async fn fetch_advisors(&self, advisor_type: &str, location: &str) -> Vec<AdvisorRecord> {
        let key = Self::cache_key(advisor_type, location);

        self.cache
            .get_or_populate(&key, move || async move {
                Ok::<_, Infallible>(self.lookup(advisor_type, location).await)
            })
            .await
            .unwrap_or_else(|never| match never {})
    }

    /// Performs an uncached lookup and applies the fallback policy
    pub async fn lookup(&self, advisor_type: &str, location: &str) -> Vec<AdvisorRecord> {
        let outcome = self.search(advisor_type, location).await;
        resolve_outcome(outcome, advisor_type, location)
    }

    /// Queries the places API once and classifies the result
    pub async fn search(&self, advisor_type: &str, location: &str) -> SearchOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return SearchOutcome::NoCredential;
        };

        match self.request_places(api_key, advisor_type, location).await {
            Ok(places) if places.is_empty() => SearchOutcome::EmptyUpstream,
            Ok(places) => SearchOutcome::Found(normalize_places(places, advisor_type)),
            Err(e) => SearchOutcome::TransportError(e),
        }
    }

    /// Sends the search request and parses the `places` array
    async fn request_places(
        &self,
        api_key: &str,
        advisor_type: &str,
        location: &str,
    ) -> Result<Vec<PlaceResult>, PlacesError> {
        let body = SearchRequest {
            q: search_query(advisor_type, location),
            location: format!("{location}, UK"),
            gl: "uk",
            hl: "en",
        };
        debug!(query = %body.q, endpoint = %self.endpoint, "querying places API");

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let parsed: PlacesResponse = serde_json::from_str(&text)?;

        Ok(parsed.into_places())
    }
}

/// Builds the free-text search query
pub fn search_query(advisor_type: &str, location: &str) -> String {
    format!("{advisor_type} in {location} UK")
}

/// Maps a lookup outcome to the listings handed to callers
///
/// Only `Found` yields real listings; every other outcome falls back to the
/// mock listings for the same query.
pub fn resolve_outcome(
    outcome: SearchOutcome,
    advisor_type: &str,
    location: &str,
) -> Vec<AdvisorRecord> {
    match outcome {
        SearchOutcome::Found(advisors) => advisors,
        SearchOutcome::NoCredential => {
            warn!("SERPER_API_KEY not set, returning mock advisors");
            generate_mock_advisors(advisor_type, location)
        }
        SearchOutcome::EmptyUpstream => {
            info!(advisor_type, location, "no places found, returning mock advisors");
            generate_mock_advisors(advisor_type, location)
        }
        SearchOutcome::TransportError(e) => {
            warn!(advisor_type, location, error = %e, "places lookup failed, returning mock advisors");
            generate_mock_advisors(advisor_type, location)
        }
    }
}

/// Converts upstream places into fully populated advisor records
///
/// Missing or blank fields get defaults: id `"serper-{index}"`, rating and
/// reviews 0, empty address, category `advisor_type`, link `"#"`.
pub fn normalize_places(places: Vec<PlaceResult>, advisor_type: &str) -> Vec<AdvisorRecord> {
    places
        .into_iter()
        .enumerate()
        .map(|(index, place)| AdvisorRecord {
            id: present(place.place_id).unwrap_or_else(|| format!("serper-{index}")),
            title: present(place.title)
                .or_else(|| present(place.name))
                .unwrap_or_default(),
            rating: place
                .rating
                .filter(|r| r.is_finite())
                .map_or(0.0, |r| r.clamp(0.0, MAX_RATING)),
            reviews: place
                .reviews
                .filter(|r| r.is_finite() && *r > 0.0)
                .map_or(0, |r| r.round() as u64),
            address: present(place.address).unwrap_or_default(),
            phone: present(place.phone_number).or_else(|| present(place.phone)),
            category: present(place.category).unwrap_or_else(|| advisor_type.to_string()),
            link: present(place.website).unwrap_or_else(|| "#".to_string()),
        })
        .collect()
}

/// Treats blank strings as absent
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
