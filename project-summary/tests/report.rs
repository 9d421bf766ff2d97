use std::cell::Cell;
use std::path::PathBuf;

use project_summary::{
    flatten, generate_report, GraphQlClient, ProjectResponse, QueryError, ReportConfig,
    ReportRenderer, RunOutcome, RunnerError,
};
use serde_json::Value;
use tempfile::TempDir;

fn fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Answers every query with a canned result and counts the calls.
struct FakeClient {
    response: Result<Value, String>,
    calls: Cell<usize>,
}

impl FakeClient {
    fn answering(data: Value) -> Self {
        Self {
            response: Ok(data),
            calls: Cell::new(0),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Cell::new(0),
        }
    }
}

impl GraphQlClient for FakeClient {
    async fn execute_query(&self, _query: &str, _variables: Value) -> Result<Value, QueryError> {
        self.calls.set(self.calls.get() + 1);
        match &self.response {
            Ok(data) => Ok(data.clone()),
            Err(message) => Err(QueryError::GraphQl {
                messages: vec![message.clone()],
            }),
        }
    }
}

fn config(project_url: &str, output_path: PathBuf) -> ReportConfig {
    ReportConfig::new(
        project_url.to_string(),
        "Acme status".to_string(),
        output_path,
        "token".to_string(),
        "bug",
        "wontfix",
    )
}

#[test]
fn flattens_fixture_in_board_order() {
    let response = ProjectResponse::from_value(fixture("project_response.json")).unwrap();
    let issues = flatten(response).unwrap();

    let titles: Vec<&str> = issues.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Fix bug", "Add feature"]);
    assert_eq!(issues[0].assignees, ["alice"]);
    assert_eq!(issues[0].labels, ["bug"]);
    assert!(issues[1].assignees.is_empty());
    assert_eq!(issues[1].labels, ["enhancement"]);
    assert_eq!(issues[1].repository, "acme/gadgets");
}

#[tokio::test]
async fn writes_report_for_org_project() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("report.md");
    let client = FakeClient::answering(fixture("project_response.json"));

    let outcome = generate_report(
        &client,
        &config("https://github.com/orgs/acme/projects/1", output.clone()),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Written {
            path: output.clone(),
            issues: 2
        }
    );
    assert_eq!(client.calls.get(), 1);

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("# Acme status"));
    assert!(report.contains("## Open issues"));
    assert!(!report.contains("Old crash"));

    let fix_bug = report.lines().find(|l| l.contains("[Fix bug]")).unwrap();
    assert!(fix_bug.contains("@alice"));
    assert!(fix_bug.contains("**bug**"));
    assert!(fix_bug.contains("interesting"));

    let add_feature = report.lines().find(|l| l.contains("[Add feature]")).unwrap();
    assert!(add_feature.contains("enhancement"));
    assert!(add_feature.ends_with("| other |"));

    assert!(report.find("[Fix bug]").unwrap() < report.find("[Add feature]").unwrap());
}

#[tokio::test]
async fn report_matches_direct_rendering() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("report.md");
    let config = config("https://github.com/orgs/acme/projects/1", output.clone());
    let client = FakeClient::answering(fixture("project_response.json"));

    generate_report(&client, &config).await.unwrap();

    let issues =
        flatten(ProjectResponse::from_value(fixture("project_response.json")).unwrap()).unwrap();
    let expected = ReportRenderer::new()
        .render(
            config.title(),
            config.project_url(),
            &issues,
            config.interesting_labels(),
            config.uninteresting_labels(),
        )
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
}

#[tokio::test]
async fn overwrites_existing_report() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("report.md");
    std::fs::write(&output, "stale content that should disappear").unwrap();
    let client = FakeClient::answering(fixture("project_response.json"));

    generate_report(
        &client,
        &config("https://github.com/orgs/acme/projects/1", output.clone()),
    )
    .await
    .unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(!report.contains("stale content"));
}

#[tokio::test]
async fn repository_project_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("report.md");
    let client = FakeClient::answering(fixture("project_response.json"));

    let outcome = generate_report(
        &client,
        &config("https://github.com/acme/widgets/projects/1", output.clone()),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Unsupported {
            owner: "acme/widgets".to_string()
        }
    );
    assert!(!outcome.is_written());
    assert_eq!(client.calls.get(), 0);
    assert!(!output.exists());
}

#[tokio::test]
async fn failing_query_surfaces_message_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("report.md");
    let client = FakeClient::failing("Bad credentials");

    let error = generate_report(
        &client,
        &config("https://github.com/orgs/acme/projects/1", output.clone()),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, RunnerError::Query(_)));
    assert!(error.to_string().contains("Bad credentials"));
    assert!(!output.exists());
}

#[tokio::test]
async fn invalid_url_fails_before_querying() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("report.md");
    let client = FakeClient::answering(fixture("project_response.json"));

    let error = generate_report(
        &client,
        &config("https://github.com/orgs/acme/projects/latest", output.clone()),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, RunnerError::InvalidProjectUrl(_)));
    assert_eq!(client.calls.get(), 0);
    assert!(!output.exists());
}

#[tokio::test]
async fn missing_project_is_malformed_response() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("report.md");
    let client = FakeClient::answering(serde_json::json!({
        "organization": { "name": "Acme", "project": null }
    }));

    let error = generate_report(
        &client,
        &config("https://github.com/orgs/acme/projects/1", output.clone()),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, RunnerError::MalformedResponse(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn unwritable_output_is_a_write_error() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("missing-dir").join("report.md");
    let client = FakeClient::answering(fixture("project_response.json"));

    let error = generate_report(
        &client,
        &config("https://github.com/orgs/acme/projects/1", output),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, RunnerError::Write { .. }));
}
