//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::config::{validate_query, web_search_url, IndexStrategy, SearchConfig};
use crate::error::Result;
use crate::highlight::Highlighter;
use crate::locator::PageLocator;
use crate::render::Renderer;
use crate::session::Session;
use crate::types::MatchRecord;

/// Search the Constitution of the Republic of Uganda by article, heading or keyword.
#[derive(Parser)]
#[command(name = "constitution-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the document comes from and which pages to index.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Path to the constitution PDF (default: $CONSTITUTION_PDF or the well-known file name)
    #[arg(short, long)]
    pub document: Option<PathBuf>,

    /// First page to index, 1-based; use 27 to skip the table of contents
    #[arg(short = 'p', long)]
    pub start_page: Option<usize>,
}

impl SourceArgs {
    /// Environment settings with command-line overrides applied.
    fn config(&self) -> Result<SearchConfig> {
        let mut config = SearchConfig::from_env()?;
        if let Some(document) = &self.document {
            config = config.with_document(document);
        }
        if let Some(start_page) = self.start_page {
            config = config.with_start_page(start_page);
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search by article number, heading or keyword.
    Search {
        /// Article number or text to look for
        query: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Indexing strategy (default: $CONSTITUTION_STRATEGY or articles)
        #[arg(short, long, value_enum)]
        strategy: Option<IndexStrategy>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one article with all of its clauses.
    Article {
        /// Article number
        number: u32,

        #[command(flatten)]
        source: SourceArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a locator that opens the document at a page.
    Open {
        /// Page number, 1-based
        page: usize,

        /// Path to the constitution PDF
        #[arg(short, long)]
        document: Option<PathBuf>,

        /// Term for the viewer to search for
        #[arg(short, long)]
        term: Option<String>,
    },

    /// Print a web search URL for the query.
    Web {
        /// Article number or text to look for
        query: String,
    },
}

/// A match with its locator, as printed by `--json`.
#[derive(Serialize)]
struct Hit<'a> {
    #[serde(flatten)]
    record: &'a MatchRecord,
    locator: PageLocator,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            source,
            strategy,
            json,
        } => {
            let mut config = source.config()?;
            if let Some(strategy) = strategy {
                config = config.with_strategy(strategy);
            }
            search_command(&query, &config, json)
        }
        Commands::Article {
            number,
            source,
            json,
        } => {
            let config = source.config()?.with_strategy(IndexStrategy::Articles);
            search_command(&number.to_string(), &config, json)
        }
        Commands::Open {
            page,
            document,
            term,
        } => open_command(page, document, term),
        Commands::Web { query } => web_command(&query),
    }
}

/// Execute the search command.
fn search_command(query: &str, config: &SearchConfig, json: bool) -> Result<()> {
    // Reject a blank query before touching the document
    let query = validate_query(query)?;
    let highlighter = Highlighter::new(query)?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Loading {}...", config.document.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let session = match Session::load(config) {
        Ok(session) => session,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Searching...");
    let results = session.search(query);
    pb.finish_and_clear();
    let results = results?;

    if json {
        let hits: Vec<Hit<'_>> = results
            .iter()
            .map(|record| Hit {
                record,
                locator: session.locate(record),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if !results.is_empty() {
        println!(
            "{} {} for {}",
            style(results.len()).bold(),
            if results.len() == 1 { "result" } else { "results" },
            style(query).cyan()
        );
        println!();
    }

    let renderer = Renderer::new(highlighter).with_styling(console::colors_enabled());
    println!(
        "{}",
        renderer.render_all(
            results
                .iter()
                .map(|record| (record, session.locate(record)))
        )
    );

    Ok(())
}

/// Execute the open command.
fn open_command(page: usize, document: Option<PathBuf>, term: Option<String>) -> Result<()> {
    let document = match document {
        Some(document) => document,
        None => SearchConfig::from_env()?.document,
    };

    let mut locator = PageLocator::from_page_number(document, page)?;
    if let Some(term) = term {
        locator = locator.with_term(term);
    }

    println!("{}", locator.to_url()?);
    Ok(())
}

/// Execute the web command.
fn web_command(query: &str) -> Result<()> {
    let query = validate_query(query)?;
    println!("{}", web_search_url(query));
    Ok(())
}
