//! Label categories.

/// How noteworthy a label (or an issue carrying it) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCategory {
    Interesting,
    Uninteresting,
    Other,
}

impl LabelCategory {
    /// Returns the category name used in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interesting => "interesting",
            Self::Uninteresting => "uninteresting",
            Self::Other => "other",
        }
    }
}

/// The configured interesting and uninteresting label names.
///
/// Matching ignores case, as GitHub label names do.
#[derive(Debug, Clone, Default)]
pub struct LabelSets {
    interesting: Vec<String>,
    uninteresting: Vec<String>,
}

impl LabelSets {
    /// Creates label sets from the configured names.
    #[must_use]
    pub fn new(interesting: &[String], uninteresting: &[String]) -> Self {
        Self {
            interesting: interesting.iter().map(|l| l.to_lowercase()).collect(),
            uninteresting: uninteresting.iter().map(|l| l.to_lowercase()).collect(),
        }
    }

    /// Classifies a single label.
    #[must_use]
    pub fn label_category(&self, label: &str) -> LabelCategory {
        let label = label.to_lowercase();
        if self.interesting.contains(&label) {
            LabelCategory::Interesting
        } else if self.uninteresting.contains(&label) {
            LabelCategory::Uninteresting
        } else {
            LabelCategory::Other
        }
    }

    /// Classifies an issue by its labels.
    ///
    /// Any interesting label wins over uninteresting ones.
    #[must_use]
    pub fn issue_category<S: AsRef<str>>(&self, labels: &[S]) -> LabelCategory {
        let categories: Vec<LabelCategory> = labels
            .iter()
            .map(|label| self.label_category(label.as_ref()))
            .collect();

        if categories.contains(&LabelCategory::Interesting) {
            LabelCategory::Interesting
        } else if categories.contains(&LabelCategory::Uninteresting) {
            LabelCategory::Uninteresting
        } else {
            LabelCategory::Other
        }
    }
}
