//! Application commands
//!
//! Runs a parsed `Command` against a shared `AdvisorClient` and renders the
//! result as text for stdout.

use futures::future::join_all;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

use crate::cli::{parse_query, CliError, Command, FetchQuery};
use crate::data::{all_advisor_types, all_cities, all_combinations, AdvisorClient};
use crate::schema::{advisor_list_schema, local_business_schema};

/// Errors surfaced to the user by a command
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Number of listings obtained for one catalog combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmSummary {
    pub advisor_type: &'static str,
    pub city: &'static str,
    pub count: usize,
}

/// Command runner holding the client (and therefore the cache) for the process
pub struct App {
    client: AdvisorClient,
}

impl App {
    pub fn new(client: AdvisorClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AdvisorClient {
        &self.client
    }

    /// Runs a command and returns what should be printed
    pub async fn run(&self, command: &Command) -> Result<String, AppError> {
        match command {
            Command::Fetch {
                advisor_type,
                location,
                schema,
            } => {
                let query = parse_query(advisor_type, location)?;
                self.fetch(&query, *schema).await
            }
            Command::Warm => Ok(render_warm(&self.warm().await)),
            Command::Catalog { json: false } => Ok(render_catalog()),
            Command::Catalog { json: true } => render_catalog_json(),
        }
    }

    /// Fetches listings for a query as pretty JSON
    ///
    /// With `schema`, prints the ItemList JSON-LD, followed by the city page
    /// JSON-LD when the location is a catalog city.
    pub async fn fetch(&self, query: &FetchQuery, schema: bool) -> Result<String, AppError> {
        let advisors = self
            .client
            .fetch_advisors(&query.advisor_type, &query.location)
            .await;

        if !schema {
            return Ok(serde_json::to_string_pretty(&advisors)?);
        }

        let mut documents = vec![advisor_list_schema(
            &advisors,
            &query.location,
            &query.advisor_type,
        )];
        if let Some(city) = query.city {
            documents.push(local_business_schema(city));
        }

        Ok(serde_json::to_string_pretty(&Value::Array(documents))?)
    }

    /// Fetches every catalog combination concurrently
    ///
    /// All lookups go through the same client, so repeated runs within the
    /// cache TTL are served from memory.
    pub async fn warm(&self) -> Vec<WarmSummary> {
        let purged = self.client.cache().purge_expired();
        let pairs: Vec<_> = all_combinations().collect();

        let results = join_all(
            pairs
                .iter()
                .map(|(advisor_type, city)| self.client.fetch_advisors(advisor_type.name, city.name)),
        )
        .await;

        let summaries: Vec<WarmSummary> = pairs
            .iter()
            .zip(results)
            .map(|((advisor_type, city), advisors)| WarmSummary {
                advisor_type: advisor_type.name,
                city: city.name,
                count: advisors.len(),
            })
            .collect();

        info!(combinations = summaries.len(), purged, "cache warm complete");
        summaries
    }
}

fn render_warm(summaries: &[WarmSummary]) -> String {
    summaries
        .iter()
        .map(|s| format!("{} in {}: {} advisors", s.advisor_type, s.city, s.count))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_catalog() -> String {
    let mut lines = vec!["Advisor types:".to_string()];
    lines.extend(
        all_advisor_types()
            .iter()
            .map(|t| format!("  {:<22}{}", t.slug, t.name)),
    );
    lines.push("Cities:".to_string());
    lines.extend(
        all_cities()
            .iter()
            .map(|c| format!("  {:<22}{}, {}", c.slug, c.name, c.county)),
    );
    lines.join("\n")
}

fn render_catalog_json() -> Result<String, AppError> {
    let catalog = json!({
        "advisorTypes": all_advisor_types(),
        "cities": all_cities(),
    });
    Ok(serde_json::to_string_pretty(&catalog)?)
}
