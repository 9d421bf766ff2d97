//! Orchestrates a project summary run.
//!
//! Parse the project URL, query the board, flatten the cards, render the
//! report and write it out. Each step runs only after the previous one
//! succeeded, so a failure never leaves a report behind.

mod error;
mod outcome;

pub use error::RunnerError;
pub use outcome::RunOutcome;

use crate::config::ReportConfig;
use crate::project::{parse_project_url, OwnerKind};
use crate::query::{fetch_open_issues, GraphQlClient};
use crate::report::ReportRenderer;
use crate::response::{flatten, ProjectResponse};
use octocrab::Octocrab;
use tracing::{debug, info, warn};

/// Runs a project summary against GitHub.
pub struct Runner {
    config: ReportConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: ReportConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .build()?;
        Ok(Self { config, octocrab })
    }

    /// Executes the full orchestration flow.
    pub async fn run(&self) -> Result<RunOutcome, RunnerError> {
        generate_report(&self.octocrab, &self.config).await
    }
}

/// Generates the report described by `config` using `client` for the query.
///
/// Repository-level projects are not supported: a warning is logged and
/// [`RunOutcome::Unsupported`] returned without querying or writing anything.
///
/// # Errors
///
/// Returns [`RunnerError`] if any step fails. The report file is only
/// written once every other step succeeded.
pub async fn generate_report<C: GraphQlClient>(
    client: &C,
    config: &ReportConfig,
) -> Result<RunOutcome, RunnerError> {
    let reference = parse_project_url(config.project_url())?;

    match reference.owner_kind {
        OwnerKind::Organization => {
            info!(
                org = %reference.owner,
                project = reference.number,
                "Project is configured at the org level"
            );
        }
        OwnerKind::Repository => {
            info!(
                repo = %reference.owner,
                project = reference.number,
                "Project is configured at the repo level"
            );
            warn!("Repository level GitHub projects are not supported yet");
            return Ok(RunOutcome::Unsupported {
                owner: reference.owner,
            });
        }
    }

    let raw = fetch_open_issues(client, &reference).await?;
    let issues = flatten(ProjectResponse::from_value(raw)?)?;

    for issue in &issues {
        debug!(url = %issue.url, title = %issue.title, "Processing card");
    }
    info!(count = issues.len(), "Found open issues");

    info!("Generating the report markdown");
    let report = ReportRenderer::new().render(
        config.title(),
        config.project_url(),
        &issues,
        config.interesting_labels(),
        config.uninteresting_labels(),
    )?;

    let path = config.output_path();
    info!(path = %path.display(), "Writing the report");
    tokio::fs::write(path, report)
        .await
        .map_err(|source| RunnerError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Done!");
    Ok(RunOutcome::Written {
        path: path.to_path_buf(),
        issues: issues.len(),
    })
}
