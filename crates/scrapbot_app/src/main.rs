//! Terminal client for the Scrapbot backend.
//!
//! Three operations against a configured base endpoint:
//!
//! - `scrapbot ingest --url <URL> [--max-depth N]` - scrape and index a page
//! - `scrapbot ask <QUESTION>` - answer a question from indexed content
//! - `scrapbot reset` - clear the backend's stored embeddings
//!
//! `scrapbot shell` opens an interactive loop driving the same operations.

use clap::{Parser, Subcommand, ValueEnum};

mod app;
mod config;
mod logging;
mod render;

use logging::LogDestination;

/// Client for the Scrapbot scraping and question-answering backend.
#[derive(Parser)]
#[command(name = "scrapbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL; overrides the config file.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Where log output goes.
    #[arg(long, global = true, value_enum, default_value_t = LogArg::File)]
    log: LogArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogArg {
    /// Write to ./scrapbot.log in the current directory.
    File,
    /// Write to the terminal.
    Terminal,
    /// Write to both.
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a URL into the backend's content store.
    Ingest {
        /// Page to scrape and index.
        #[arg(long)]
        url: String,

        /// How many levels of links to follow.
        #[arg(long, default_value_t = scrapbot_core::DEFAULT_MAX_DEPTH)]
        max_depth: u32,
    },

    /// Ask a question about previously ingested content.
    Ask {
        /// The question text.
        question: String,
    },

    /// Clear the backend's stored embeddings.
    Reset,

    /// Interactive shell driving all three operations.
    Shell,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log.into());

    let mut config = config::load();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let mut app = app::App::new(&config);
    match cli.command {
        Commands::Ingest { url, max_depth } => app.run_ingest(url, max_depth),
        Commands::Ask { question } => app.run_ask(question),
        Commands::Reset => app.run_reset(),
        Commands::Shell => app.run_shell(&mut config),
    }
}
