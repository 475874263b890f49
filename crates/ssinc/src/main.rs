//! Command-line front end for include resolution

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::render::RenderArgs;
use commands::scan::ScanArgs;

#[derive(Parser)]
#[command(name = "ssinc")]
#[command(version)]
#[command(about = "Expand server-side include comments in static pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the includes in a page and write the result
    Render {
        /// Page to resolve
        page: PathBuf,

        /// Directory include names resolve against (defaults to the
        /// page's directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a JSON run summary to stderr
        #[arg(long)]
        report: bool,

        /// Fail if any include could not be resolved
        #[arg(long)]
        strict: bool,
    },

    /// List the include directives a page contains
    Scan {
        /// Page to scan
        page: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. Rendered markup goes to stdout, so
    // diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssinc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            page,
            root,
            output,
            report,
            strict,
        } => {
            commands::render::execute(RenderArgs {
                page,
                root,
                output,
                report,
                strict,
            })
            .await
        }
        Commands::Scan { page, json } => commands::scan::execute(ScanArgs { page, json }),
    }
}
