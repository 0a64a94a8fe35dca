//! Repository link placeholders.
//!
//! Generated diagrams carry click targets such as
//! `https://github.com/[username]/[repo]/blob/[branch]/src/main.rs`. The
//! placeholders are filled in once the repository is known.

/// Branch used when the repository's default branch is unknown.
pub const DEFAULT_BRANCH: &str = "main";

/// Values substituted for `[username]`, `[repo]` and `[branch]`.
///
/// # Examples
///
/// ```
/// use mermend::links::RepoLinks;
///
/// let links = RepoLinks::new("octo", "widgets");
/// assert_eq!(
///     links.apply("click A \"https://github.com/[username]/[repo]/blob/[branch]/a.rs\""),
///     "click A \"https://github.com/octo/widgets/blob/main/a.rs\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLinks {
    username: String,
    repo: String,
    branch: String,
}

impl RepoLinks {
    /// Create links for `username/repo` on the default branch.
    pub fn new(username: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            repo: repo.into(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Use `branch` instead of the default. An empty name keeps the default.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        let branch = branch.into();
        if !branch.trim().is_empty() {
            self.branch = branch;
        }
        self
    }

    /// The repository owner.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// The branch links point at.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Replace every placeholder in `text`.
    pub fn apply(&self, text: &str) -> String {
        text.replace("[username]", &self.username)
            .replace("[repo]", &self.repo)
            .replace("[branch]", &self.branch)
    }
}
