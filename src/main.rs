use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use tep_scraper::ensembl::EnsemblRest;
use tep_scraper::output::{self, OutputMode};
use tep_scraper::scrapers::sgc::SgcSite;
use tep_scraper::{logging, pipeline};

#[derive(Parser)]
#[command(name = "tep_scraper")]
#[command(about = "Fetches TEP data from the Structural Genomics Consortium")]
#[command(version = "0.1.0")]
struct Cli {
    /// Output file (gzipped JSON)
    #[arg(long, short)]
    output: PathBuf,

    /// Write a single JSON object keyed by gene id instead of JSON lines
    #[arg(long)]
    single_object: bool,

    /// File into which the logs are saved; defaults to standard error
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_file.as_deref());

    let client = reqwest::Client::new();
    let site = SgcSite::new(client.clone());
    let ensembl = EnsemblRest::new(client);

    let records = pipeline::run(&site, &ensembl).await?;

    let mode = if cli.single_object {
        OutputMode::KeyedObject
    } else {
        OutputMode::JsonLines
    };

    info!("Saving data to {}.", cli.output.display());
    output::write_records(&cli.output, &records, mode)?;

    Ok(())
}
