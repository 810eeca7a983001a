//! faker-dsl CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "faker-dsl")]
#[command(version)]
#[command(about = "Render mock data templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template and print the result as JSON
    Render {
        /// Template text (reads --file or stdin when omitted)
        template: Option<String>,

        /// Read the template from FILE
        #[arg(short = 'f', long, conflicts_with = "template")]
        file: Option<String>,

        /// Seed the random generator for reproducible output
        #[arg(short = 's', long)]
        seed: Option<u64>,

        /// Largest accepted *N multiplier
        #[arg(long)]
        max_multiplier: Option<usize>,

        /// Maximum nesting of JSON.stringify wrappers
        #[arg(long)]
        max_depth: Option<usize>,

        /// Print the body a mock endpoint would return for this result
        #[arg(long)]
        response: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List available capabilities
    List {
        /// Only show capabilities under this path (e.g. "name" or "date")
        prefix: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faker_dsl=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            template,
            file,
            seed,
            max_multiplier,
            max_depth,
            response,
            pretty,
        } => commands::render::execute(commands::render::RenderArgs {
            template,
            file,
            seed,
            max_multiplier,
            max_depth,
            response,
            pretty,
        }),
        Commands::List { prefix } => commands::list::execute(commands::list::ListArgs { prefix }),
    }
}
