//! Markdown report generation.
//!
//! A report is a summary block (title, project link, category counts)
//! followed by an "Open issues" table. Issues are classified against the
//! configured interesting and uninteresting labels so readers can tell the
//! two apart from everything else.

mod category;
mod error;
mod renderer;

pub use category::{LabelCategory, LabelSets};
pub use error::TemplateError;
pub use renderer::ReportRenderer;
