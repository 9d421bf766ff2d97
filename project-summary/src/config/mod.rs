//! Run configuration.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

/// Configuration for generating a project summary report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// URL of the project board.
    project_url: String,
    /// Report title.
    title: String,
    /// Where the markdown report is written.
    output_path: PathBuf,
    /// GitHub token used for the GraphQL query.
    token: String,
    /// Labels marking noteworthy issues.
    interesting_labels: Vec<String>,
    /// Labels marking low-priority issues.
    uninteresting_labels: Vec<String>,
}

impl ReportConfig {
    /// Creates a new configuration for a run.
    ///
    /// Label lists are given as comma separated strings, see [`split_comma_separated`].
    pub fn new(
        project_url: String,
        title: String,
        output_path: PathBuf,
        token: String,
        interesting_labels: &str,
        uninteresting_labels: &str,
    ) -> Self {
        Self {
            project_url,
            title,
            output_path,
            token,
            interesting_labels: split_comma_separated(interesting_labels),
            uninteresting_labels: split_comma_separated(uninteresting_labels),
        }
    }

    /// Returns the project board URL.
    pub fn project_url(&self) -> &str {
        &self.project_url
    }

    /// Returns the report title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the report output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the interesting label names.
    pub fn interesting_labels(&self) -> &[String] {
        &self.interesting_labels
    }

    /// Returns the uninteresting label names.
    pub fn uninteresting_labels(&self) -> &[String] {
        &self.uninteresting_labels
    }
}

/// Splits a comma separated list.
///
/// Entries are trimmed and empty entries dropped, so an empty input yields
/// an empty list rather than a list holding one empty string.
#[must_use]
pub fn split_comma_separated(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
