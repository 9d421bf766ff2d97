//! Run outcome types.

use std::path::PathBuf;

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The report was written.
    Written {
        /// Path the report was written to.
        path: PathBuf,
        /// Number of open issues in the report.
        issues: usize,
    },

    /// The project is repository-level, which is not supported. Nothing was written.
    Unsupported {
        /// Repository owning the project, as `owner/repo`.
        owner: String,
    },
}

impl RunOutcome {
    /// Returns true if a report file was written.
    #[must_use]
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}
