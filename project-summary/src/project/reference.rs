//! Structured project references.

use std::fmt;

/// Who owns a project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    /// An organization-level project, e.g. `https://github.com/orgs/github/projects/910`.
    Organization,
    /// A repository-level project, e.g. `https://github.com/octo/hello/projects/1`.
    Repository,
}

/// A project board parsed out of its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReference {
    /// Kind of owner the project belongs to.
    pub owner_kind: OwnerKind,

    /// Organization login, or `owner/repo` for repository projects.
    pub owner: String,

    /// Project number as shown in the URL.
    pub number: u32,
}

impl fmt::Display for ProjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner_kind {
            OwnerKind::Organization => write!(f, "org {} project #{}", self.owner, self.number),
            OwnerKind::Repository => write!(f, "repo {} project #{}", self.owner, self.number),
        }
    }
}
