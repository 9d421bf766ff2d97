//! GitHub Actions integration.
//!
//! Action inputs reach the process as `INPUT_<NAME>` environment variables,
//! where `<NAME>` is the input name upper-cased with spaces replaced by
//! underscores. Failures are reported back with the `::error::` workflow
//! command.

use crate::config::ConfigError;
use std::env;

/// Returns the environment variable holding an action input.
#[must_use]
pub fn input_env_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Reads an action input, trimmed. Empty inputs count as absent.
#[must_use]
pub fn get_input(name: &str) -> Option<String> {
    env::var(input_env_var(name))
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolves an input from an explicit value, falling back to the action input.
///
/// Optional inputs that are missing resolve to an empty string.
///
/// # Errors
///
/// Returns [`ConfigError::MissingInput`] if a required input is missing.
pub fn resolve_input(
    explicit: Option<String>,
    name: &str,
    required: bool,
) -> Result<String, ConfigError> {
    match explicit.filter(|value| !value.is_empty()).or_else(|| get_input(name)) {
        Some(value) => Ok(value),
        None if required => Err(ConfigError::MissingInput {
            name: name.to_string(),
        }),
        None => Ok(String::new()),
    }
}

/// Resolves a required input, falling back to a plain environment variable.
///
/// The explicit value wins, then the action input, then `env_var`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingInput`] if none of them is set.
pub fn resolve_input_or_env(
    explicit: Option<String>,
    name: &str,
    env_var: &str,
) -> Result<String, ConfigError> {
    explicit
        .filter(|value| !value.is_empty())
        .or_else(|| get_input(name))
        .or_else(|| {
            env::var(env_var)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        })
        .ok_or_else(|| ConfigError::MissingInput {
            name: name.to_string(),
        })
}

/// Formats the workflow command marking the current step as failed.
#[must_use]
pub fn format_error_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}

/// Returns true when running inside a GitHub Actions runner.
#[must_use]
pub fn is_github_actions() -> bool {
    env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_input_names_to_env_vars() {
        assert_eq!(input_env_var("project-url"), "INPUT_PROJECT-URL");
        assert_eq!(input_env_var("outputPath"), "INPUT_OUTPUTPATH");
        assert_eq!(input_env_var("my input"), "INPUT_MY_INPUT");
    }

    #[test]
    fn reads_trimmed_inputs() {
        temp_env::with_vars(
            [
                ("INPUT_TITLE", Some("  Weekly status  ")),
                ("INPUT_INTERESTINGLABELS", Some("   ")),
            ],
            || {
                assert_eq!(get_input("title").as_deref(), Some("Weekly status"));
                assert_eq!(get_input("interestingLabels"), None);
            },
        );
    }

    #[test]
    fn explicit_values_take_precedence() {
        temp_env::with_var("INPUT_TOKEN", Some("from-action"), || {
            let token = resolve_input(Some("from-flag".to_string()), "token", true).unwrap();
            assert_eq!(token, "from-flag");

            let token = resolve_input(None, "token", true).unwrap();
            assert_eq!(token, "from-action");
        });
    }

    #[test]
    fn missing_inputs() {
        temp_env::with_var_unset("INPUT_OUTPUTPATH", || {
            let result = resolve_input(None, "outputPath", true);
            assert!(matches!(result, Err(ConfigError::MissingInput { name }) if name == "outputPath"));

            assert_eq!(resolve_input(None, "outputPath", false).unwrap(), "");
        });
    }

    #[test]
    fn env_fallback_comes_after_action_input() {
        temp_env::with_vars(
            [
                ("INPUT_TOKEN", Some("org-pat")),
                ("GITHUB_TOKEN", Some("repo-scoped")),
            ],
            || {
                let token = resolve_input_or_env(None, "token", "GITHUB_TOKEN").unwrap();
                assert_eq!(token, "org-pat");

                let token =
                    resolve_input_or_env(Some("flag".to_string()), "token", "GITHUB_TOKEN")
                        .unwrap();
                assert_eq!(token, "flag");
            },
        );

        temp_env::with_vars(
            [
                ("INPUT_TOKEN", None::<&str>),
                ("GITHUB_TOKEN", Some("repo-scoped")),
            ],
            || {
                let token = resolve_input_or_env(None, "token", "GITHUB_TOKEN").unwrap();
                assert_eq!(token, "repo-scoped");
            },
        );

        temp_env::with_vars_unset(["INPUT_TOKEN", "GITHUB_TOKEN"], || {
            let result = resolve_input_or_env(None, "token", "GITHUB_TOKEN");
            assert!(matches!(result, Err(ConfigError::MissingInput { name }) if name == "token"));
        });
    }

    #[test]
    fn escapes_error_command() {
        assert_eq!(
            format_error_command("100% broken\r\nsee logs"),
            "::error::100%25 broken%0D%0Asee logs"
        );
    }

    #[test]
    fn detects_actions_runner() {
        temp_env::with_var("GITHUB_ACTIONS", Some("true"), || {
            assert!(is_github_actions());
        });
        temp_env::with_var_unset("GITHUB_ACTIONS", || {
            assert!(!is_github_actions());
        });
    }
}
