//! Command-line interface parsing for the advisor directory tool
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a `ClientConfig` plus a validated query. Catalog slugs such as
//! `mortgage-advisors` or `bristol` are resolved to their display names, which
//! are what the places search and the mock listings use.

use std::time::Duration;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{ClientConfig, API_KEY_ENV, DEFAULT_ENDPOINT};
use crate::data::{resolve_advisor_type, resolve_city, City};

/// Error types for CLI argument handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// A required argument was empty or whitespace
    #[error("Invalid {0}: must not be empty")]
    EmptyArgument(&'static str),
}

/// FindAnAdvisor - cached advisor listings for UK towns and cities
#[derive(Parser, Debug)]
#[command(name = "findanadvisor")]
#[command(about = "Fetch advisor listings and schema.org data for the FindAnAdvisor directory")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Places-search API key; without one, mock listings are returned
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Places-search endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Upstream request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// How long fetched listings stay cached, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 3600, global = true)]
    pub cache_ttl_secs: u64,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch advisors of a type in a location
    ///
    /// Examples:
    ///   findanadvisor fetch mortgage-advisors bristol
    ///   findanadvisor fetch "Wealth Managers" "St Albans" --schema
    Fetch {
        /// Advisor type, as a catalog slug or free text
        advisor_type: String,
        /// Location, as a catalog slug or free text
        location: String,
        /// Print schema.org JSON-LD instead of raw records
        #[arg(long)]
        schema: bool,
    },
    /// Fetch every catalog combination concurrently and summarize
    Warm,
    /// List the advisor types and cities in the catalog
    Catalog {
        /// Print the catalog as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// A validated advisor lookup
#[derive(Debug, Clone, PartialEq)]
pub struct FetchQuery {
    /// Display name used for the search (e.g., "Mortgage Advisors")
    pub advisor_type: String,
    /// Display name of the location (e.g., "Bristol")
    pub location: String,
    /// Catalog entry for the location, when it is one of the directory's cities
    pub city: Option<&'static City>,
}

impl Cli {
    /// Builds the client configuration from the parsed arguments
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_api_key(self.api_key.clone())
            .with_endpoint(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_cache_ttl(Duration::from_secs(self.cache_ttl_secs))
    }
}

/// Validates and resolves the positional arguments of `fetch`
///
/// # Returns
/// * `Ok(FetchQuery)` with catalog slugs replaced by display names
/// * `Err(CliError::EmptyArgument)` if either argument is blank
pub fn parse_query(advisor_type: &str, location: &str) -> Result<FetchQuery, CliError> {
    let advisor_type = advisor_type.trim();
    let location = location.trim();

    if advisor_type.is_empty() {
        return Err(CliError::EmptyArgument("advisor type"));
    }
    if location.is_empty() {
        return Err(CliError::EmptyArgument("location"));
    }

    let city = resolve_city(location);

    Ok(FetchQuery {
        advisor_type: resolve_advisor_type(advisor_type)
            .map_or_else(|| advisor_type.to_string(), |t| t.name.to_string()),
        location: city.map_or_else(|| location.to_string(), |c| c.name.to_string()),
        city,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_resolves_slugs() {
        let query = parse_query("mortgage-advisors", "bristol").unwrap();

        assert_eq!(query.advisor_type, "Mortgage Advisors");
        assert_eq!(query.location, "Bristol");
        assert_eq!(query.city.unwrap().county, "City of Bristol");
    }

    #[test]
    fn test_parse_query_keeps_free_text() {
        let query = parse_query("Tax Advisors", " St Albans ").unwrap();

        assert_eq!(query.advisor_type, "Tax Advisors");
        assert_eq!(query.location, "St Albans");
        assert!(query.city.is_none());
    }

    #[test]
    fn test_parse_query_rejects_blank_arguments() {
        assert_eq!(
            parse_query("", "Leeds").unwrap_err(),
            CliError::EmptyArgument("advisor type")
        );
        let err = parse_query("Financial Advisors", "   ").unwrap_err();
        assert_eq!(err, CliError::EmptyArgument("location"));
        assert!(err.to_string().contains("Invalid location"));
    }

    #[test]
    fn test_cli_parse_fetch() {
        let cli = Cli::parse_from(["findanadvisor", "fetch", "wealth-managers", "london"]);

        assert_eq!(
            cli.command,
            Command::Fetch {
                advisor_type: "wealth-managers".to_string(),
                location: "london".to_string(),
                schema: false,
            }
        );
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.timeout_secs, 10);
        assert_eq!(cli.cache_ttl_secs, 3600);
    }

    #[test]
    fn test_cli_parse_fetch_with_schema_and_globals() {
        let cli = Cli::parse_from([
            "findanadvisor",
            "fetch",
            "Pension Advisors",
            "Cardiff",
            "--schema",
            "--timeout-secs",
            "3",
            "--api-key",
            "secret",
        ]);

        assert!(matches!(cli.command, Command::Fetch { schema: true, .. }));

        let config = cli.client_config();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_cli_parse_warm_and_catalog() {
        assert_eq!(Cli::parse_from(["findanadvisor", "warm"]).command, Command::Warm);
        assert_eq!(
            Cli::parse_from(["findanadvisor", "catalog", "--log-json"]).command,
            Command::Catalog { json: false }
        );
        assert_eq!(
            Cli::parse_from(["findanadvisor", "catalog", "--json"]).command,
            Command::Catalog { json: true }
        );
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["findanadvisor"]).is_err());
    }
}
