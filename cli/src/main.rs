//! CLI for the project summary action.
//!
//! Reads the action inputs (or their command line equivalents), writes the
//! markdown report and maps the result onto the process exit code.

use clap::Parser;
use project_summary::{
    format_error_command, is_github_actions, resolve_input, resolve_input_or_env, ReportConfig,
    RunOutcome, Runner, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable used when no token input is given.
const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Project Summary - Render the open issues of a GitHub project board as markdown.
///
/// Any option not given on the command line is read from the matching
/// GitHub Action input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project board URL [action input: project-url].
    #[arg(long)]
    project_url: Option<String>,

    /// Report title [action input: title].
    #[arg(long)]
    title: Option<String>,

    /// Path the markdown report is written to [action input: outputPath].
    #[arg(long)]
    output_path: Option<PathBuf>,

    /// GitHub token [action input: token, then GITHUB_TOKEN].
    #[arg(long)]
    token: Option<String>,

    /// Comma separated labels marking noteworthy issues [action input: interestingLabels].
    #[arg(long)]
    interesting_labels: Option<String>,

    /// Comma separated labels marking low-priority issues [action input: uninterestingLabels].
    #[arg(long)]
    uninteresting_labels: Option<String>,
}

impl Args {
    /// Resolves every option against the action inputs.
    fn into_config(self) -> Result<ReportConfig, RunnerError> {
        let output_path = self
            .output_path
            .map(|path| path.to_string_lossy().into_owned());

        Ok(ReportConfig::new(
            resolve_input(self.project_url, "project-url", true)?,
            resolve_input(self.title, "title", false)?,
            PathBuf::from(resolve_input(output_path, "outputPath", true)?),
            resolve_input_or_env(self.token, "token", TOKEN_ENV)?,
            &resolve_input(self.interesting_labels, "interestingLabels", false)?,
            &resolve_input(self.uninteresting_labels, "uninterestingLabels", false)?,
        ))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Pick the rustls provider before octocrab opens any connection
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(RunOutcome::Written { path, issues }) => {
            info!(path = %path.display(), issues, "Report written");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Unsupported { owner }) => {
            info!(owner = %owner, "No report written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to generate project summary");
            if is_github_actions() {
                println!("{}", format_error_command(&e.to_string()));
            }
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutcome, RunnerError> {
    let config = args.into_config()?;
    let runner = Runner::new(config)?;
    runner.run().await
}
