//! Markdown report renderer.

use super::{LabelCategory, LabelSets, TemplateError};
use crate::response::IssueRecord;
use handlebars::{
    handlebars_helper, no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::iter;

/// Heading of the issues section.
const OPEN_ISSUES_HEADING: &str = "Open issues";

/// Report heading used when no title is configured.
const DEFAULT_TITLE: &str = "Project summary";

/// Placeholder for empty table cells.
const EMPTY_CELL: &str = "-";

const SUMMARY_TEMPLATE: &str = "# {{title}}

Open issues on the [project board]({{project_url}}).

| Open issues | Interesting | Uninteresting | Other |
| ---: | ---: | ---: | ---: |
| {{counts.total}} | {{counts.interesting}} | {{counts.uninteresting}} | {{counts.other}} |
";

const ISSUES_TEMPLATE: &str = "## {{heading}}

{{#if issues}}
| Issue | Repository | Assignees | Labels | Category |
| --- | --- | --- | --- | --- |
{{#each issues}}| {{#if (eq category \"interesting\")}}:star: {{/if}}[{{link_text title}}]({{url}}) | {{cell repository}} | {{cell assignees}} | {{cell labels}} | {{category}} |
{{/each}}{{else}}
_No open issues._
{{/if}}";

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
/// - `cell` helper escaping text for markdown table cells
/// - `link_text` helper escaping text for link labels inside table cells
fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));
    hbs.register_helper("cell", Box::new(cell));
    hbs.register_helper("link_text", Box::new(link_text));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq variable "value")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

handlebars_helper!(cell: |text: str| escape_cell(text));
handlebars_helper!(link_text: |text: str| escape_link_text(text));

/// Escapes text so it stays inside one markdown table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

/// Escapes text used as link label inside a table cell.
fn escape_link_text(text: &str) -> String {
    escape_cell(text).replace('[', "\\[").replace(']', "\\]")
}

/// Issue counts per category, shown in the summary block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
struct CategoryCounts {
    total: usize,
    interesting: usize,
    uninteresting: usize,
    other: usize,
}

/// An issue prepared for the issues table.
#[derive(Debug, Serialize)]
struct IssueRow<'a> {
    title: &'a str,
    url: &'a str,
    repository: &'a str,
    assignees: String,
    labels: String,
    category: &'static str,
}

/// Renders project summaries as markdown.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Creates a new report renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the full report.
    ///
    /// A blank `title` falls back to "Project summary". The report is a summary block followed by an "Open issues" section
    /// listing every issue in the given order, joined by newlines.
    ///
    /// # Arguments
    ///
    /// * `title` - Report title
    /// * `project_url` - Link to the project board
    /// * `issues` - Open issues in board order
    /// * `interesting_labels` - Labels marking noteworthy issues
    /// * `uninteresting_labels` - Labels marking low-priority issues
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(
        &self,
        title: &str,
        project_url: &str,
        issues: &[IssueRecord],
        interesting_labels: &[String],
        uninteresting_labels: &[String],
    ) -> Result<String, TemplateError> {
        let labels = LabelSets::new(interesting_labels, uninteresting_labels);

        let blocks = iter::once_with(|| self.render_summary(title, project_url, issues, &labels))
            .chain(iter::once_with(|| {
                self.render_issues_section(OPEN_ISSUES_HEADING, issues, &labels)
            }))
            .collect::<Result<Vec<String>, TemplateError>>()?;

        Ok(blocks.join("\n"))
    }

    /// Renders the title, project link and category counts.
    fn render_summary(
        &self,
        title: &str,
        project_url: &str,
        issues: &[IssueRecord],
        labels: &LabelSets,
    ) -> Result<String, TemplateError> {
        let title = if title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            title
        };
        let data = json!({
            "title": title,
            "project_url": project_url,
            "counts": count_categories(issues, labels),
        });

        self.render_template(SUMMARY_TEMPLATE, &data)
    }

    /// Renders a section with one table row per issue.
    fn render_issues_section(
        &self,
        heading: &str,
        issues: &[IssueRecord],
        labels: &LabelSets,
    ) -> Result<String, TemplateError> {
        let rows: Vec<IssueRow<'_>> = issues.iter().map(|i| issue_row(i, labels)).collect();
        let data = json!({
            "heading": heading,
            "issues": rows,
        });

        self.render_template(ISSUES_TEMPLATE, &data)
    }

    /// Renders a template with the given data.
    fn render_template(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

/// Counts issues per category.
fn count_categories(issues: &[IssueRecord], labels: &LabelSets) -> CategoryCounts {
    issues.iter().fold(
        CategoryCounts {
            total: issues.len(),
            ..CategoryCounts::default()
        },
        |mut counts, issue| {
            match labels.issue_category(&issue.labels) {
                LabelCategory::Interesting => counts.interesting += 1,
                LabelCategory::Uninteresting => counts.uninteresting += 1,
                LabelCategory::Other => counts.other += 1,
            }
            counts
        },
    )
}

fn issue_row<'a>(issue: &'a IssueRecord, labels: &LabelSets) -> IssueRow<'a> {
    IssueRow {
        title: &issue.title,
        url: &issue.url,
        repository: &issue.repository,
        assignees: join_or_empty(issue.assignees.iter().map(|login| format!("@{login}"))),
        labels: join_or_empty(
            issue
                .labels
                .iter()
                .map(|name| format_label(name, labels.label_category(name))),
        ),
        category: labels.issue_category(&issue.labels).as_str(),
    }
}

/// Interesting labels are bold, uninteresting ones italic.
fn format_label(name: &str, category: LabelCategory) -> String {
    match category {
        LabelCategory::Interesting => format!("**{name}**"),
        LabelCategory::Uninteresting => format!("_{name}_"),
        LabelCategory::Other => name.to_string(),
    }
}

fn join_or_empty(items: impl Iterator<Item = String>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        joined
    }
}
