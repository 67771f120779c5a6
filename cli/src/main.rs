//! CLI for the repository describer.
//!
//! Generates short descriptions for a user's public GitHub repositories, or a
//! Markdown portfolio report summarizing the ones that have a README.

use clap::{Parser, Subcommand, ValueEnum};
use repo_describer::{Backend, RunMode, RunSummary, Runner, RunnerConfig, RunnerError, Settings};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository describer - Generate GitHub repository descriptions and portfolio reports.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Preview changes without updating descriptions or writing the report.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Override the GitHub API base URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path to the LLM config file.
    #[arg(long, global = true, default_value = "config.toml")]
    llm_config_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate and apply a short description for every public repository.
    Describe {
        /// Text generation backend.
        #[arg(long, value_enum, default_value_t = BackendArg::Local)]
        backend: BackendArg,
    },

    /// Summarize documented repositories into a Markdown report.
    Summarize {
        /// Text generation backend.
        #[arg(long, value_enum, default_value_t = BackendArg::Local)]
        backend: BackendArg,

        /// Directory the report is written to.
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum BackendArg {
    /// OpenAI-compatible completions endpoint.
    Hosted,
    /// Local model runner (ollama).
    Local,
}

impl From<BackendArg> for Backend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Hosted => Backend::Hosted,
            BackendArg::Local => Backend::Local,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            if summary.all_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with `RUST_LOG` filtering, defaulting to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let settings = Settings::from_env()?;

    let mut config = match args.command {
        Command::Describe { backend } => {
            RunnerConfig::new(RunMode::Describe, backend.into(), args.dry_run)
        }
        Command::Summarize {
            backend,
            output_dir,
        } => RunnerConfig::new(RunMode::Summarize, backend.into(), args.dry_run)
            .with_output_dir(output_dir),
    };
    config = config.with_llm_config_path(args.llm_config_path);
    if let Some(api_url) = args.api_url {
        config = config.with_api_base_uri(api_url);
    }

    let runner = Runner::new(config, settings)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );

    if summary.descriptions_updated + summary.descriptions_proposed + summary.descriptions_unchanged
        > 0
    {
        println!("  Descriptions updated: {}", summary.descriptions_updated);
        println!("  Descriptions proposed: {}", summary.descriptions_proposed);
        println!("  Descriptions unchanged: {}", summary.descriptions_unchanged);
    }
    if summary.summaries_generated + summary.summaries_fallback > 0 {
        println!("  Summaries generated: {}", summary.summaries_generated);
        println!("  Summaries with fallback text: {}", summary.summaries_fallback);
    }
    println!("  Skipped: {}", summary.skipped);
    println!("  Failed: {}", summary.failed);

    if let Some(path) = &summary.report_path {
        println!("  Report: {}", path.display());
    }
}
