use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

use next_fixture_scraper::{
    config::ScraperConfig,
    fetcher::{FileHtmlFetcher, HtmlFetcher, WebHtmlFetcher},
    fixture_scraper::FixtureScraper,
    types::ExtractionStrategy,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Scrape the club's next fixture into a JSON file", long_about = None)]
struct Cli {
    /// Where to write the fixture JSON
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Extraction strategies to try, in order
    #[arg(short, long, global = true, value_delimiter = ',')]
    strategy: Vec<ExtractionStrategy>,

    /// Print the record without writing it
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the fixtures page and write the next fixture
    Fetch {
        /// Fixtures page URL
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Run against a saved HTML page
    ParseFile {
        /// Path to the HTML file to process
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn run_with<F: HtmlFetcher>(fetcher: F, config: ScraperConfig, dry_run: bool) -> ExitCode {
    let scraper = FixtureScraper::new(fetcher, config);

    match scraper.run(dry_run) {
        Ok(outcome) => {
            println!("{}", outcome.json);
            match outcome.written_to {
                Some(path) => info!("Success! Upload {:?} to publish the fixture", path),
                None => info!("Dry run, nothing written"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to scrape fixture data: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn load_config(cli: &Cli) -> ScraperConfig {
    let url = match &cli.command {
        Some(Commands::Fetch { url }) => url.clone(),
        _ => None,
    };
    ScraperConfig::from_env().with_overrides(cli.output.clone(), &cli.strategy, url)
}

fn try_main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli);

    match &cli.command {
        Some(Commands::ParseFile { file }) => {
            if !file.exists() {
                return Err(anyhow!("No such file: {:?}", file));
            }
            Ok(run_with(FileHtmlFetcher::new(file), config, cli.dry_run))
        }
        Some(Commands::Fetch { .. }) | None => {
            info!("Scraping {} fixtures...", config.club.name);
            let fetcher = WebHtmlFetcher::new(&config.scraping)?;
            Ok(run_with(fetcher, config, cli.dry_run))
        }
    }
}

fn main() -> ExitCode {
    // Load .env file
    dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match try_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
