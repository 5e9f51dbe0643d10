//! Trend chart configuration command-line interface

mod payload;
mod resolve;

use clap::{Parser, Subcommand};
use payload::Payload;
use resolve::{Resolve, Resolved};
use serde::Serialize;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};
use trendchart_types::ChartModelConfiguration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "resolve a JSON payload into a chart configuration")]
    Resolve(Resolve),
    #[command(about = "show the default chart configuration")]
    Defaults,
    #[command(about = "print the JSON payload for an explicit chart configuration")]
    Payload(Payload),
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(resolve) => resolve.handle(),
        Commands::Defaults => handle_resp(Ok(Resolved::from(ChartModelConfiguration::default()))),
        Commands::Payload(payload) => payload.handle(),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::Registry::default()
        .with(ErrorLayer::default())
        .with(env_filter)
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr));

    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to setup tracing subscriber");
}

pub(crate) fn handle_resp<T: Serialize>(resp: Result<T, String>) {
    match resp.and_then(|resp| serde_json::to_string_pretty(&resp).map_err(|e| e.to_string())) {
        Ok(resp) => {
            println!("{resp}");
        }
        Err(e) => {
            println!("Error: {e}");
        }
    }
}
