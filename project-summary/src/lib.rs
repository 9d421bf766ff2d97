#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod actions;
pub mod config;
pub mod project;
pub mod query;
pub mod report;
pub mod response;
pub mod runner;

pub use actions::{
    format_error_command, get_input, input_env_var, is_github_actions, resolve_input,
    resolve_input_or_env,
};
pub use config::{split_comma_separated, ConfigError, ReportConfig};
pub use project::{parse_project_url, OwnerKind, ProjectReference, ProjectUrlError};
pub use query::{fetch_open_issues, GraphQlClient, QueryError, PROJECT_ISSUES_QUERY};
pub use report::{LabelCategory, LabelSets, ReportRenderer, TemplateError};
pub use response::{flatten, IssueRecord, IssueState, ProjectResponse, ResponseError};
pub use runner::{generate_report, RunOutcome, Runner, RunnerError};
