//! FindAnAdvisor CLI - fetch advisor listings for UK towns and cities
//!
//! Prints cached advisor listings (or their schema.org JSON-LD) for an advisor
//! type and location, warms the cache for every directory page, or lists the
//! directory catalog.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use findanadvisor::app::App;
use findanadvisor::cli::Cli;
use findanadvisor::data::AdvisorClient;

/// Sets up logging to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let client = AdvisorClient::new(cli.client_config())?;
    let app = App::new(client);
    Ok(app.run(&cli.command).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
