//! colchip Command-Line Client
//!
//! Fetches the column catalog through the mock service and prints it.

mod formatter;

use std::time::Duration;

use clap::Parser;
use colchip_client::{ColumnService, FetchConfig, SeededSource};
use colchip_core::Catalog;
use formatter::{create_formatter, OutputFormat};

/// colchip Command-Line Client
#[derive(Parser, Debug)]
#[command(name = "colchip")]
#[command(version, about = "Fetch and print the colchip column catalog")]
pub struct Args {
    /// Output format
    #[arg(long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Simulated fetch latency in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Probability that the fetch fails
    #[arg(long, default_value_t = 0.05)]
    pub failure_rate: f64,

    /// Seed for the failure draw (unseeded when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Convert command-line arguments to a fetch service.
    pub fn into_service(self) -> ColumnService {
        let config = FetchConfig::new()
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_failure_probability(self.failure_rate);

        let service = ColumnService::new(config);
        match self.seed {
            Some(seed) => service.with_source(SeededSource::new(seed)),
            None => service,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colchip_cli=info".into()),
        )
        .init();

    let args = Args::parse();
    let format = args.format;

    if let Err(e) = run(args).await {
        eprintln!("{}", create_formatter(format).format_error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = create_formatter(args.format);
    let service = args.into_service();

    tracing::info!(
        delay_ms = service.config().delay.as_millis() as u64,
        failure_probability = service.config().failure_probability,
        "fetching columns"
    );

    let columns = service.fetch_columns().await?;
    let catalog = Catalog::from(columns);
    tracing::info!(columns = catalog.len(), "columns fetched");

    println!("{}", formatter.format_columns(&catalog));
    Ok(())
}
