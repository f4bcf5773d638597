//! Errors from reading history and running `git`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    /// Neither the path nor any parent holds a repository.
    #[error("not a git repository: {0}")]
    NotARepo(PathBuf),

    /// The tag or revision does not resolve to a commit.
    #[error("tag not found: {0}")]
    TagNotFound(String),

    #[error("no commits found")]
    NoCommits,

    /// Carries the command line with credentials already redacted.
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("git error: {0}")]
    Git2(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_name_their_subject() {
        assert_eq!(
            GitError::NotARepo(PathBuf::from("/tmp/not-git")).to_string(),
            "not a git repository: /tmp/not-git"
        );
        assert_eq!(
            GitError::TagNotFound("v1.0.0".to_string()).to_string(),
            "tag not found: v1.0.0"
        );
    }

    #[test]
    fn test_command_failed_display() {
        let err = GitError::CommandFailed {
            command: "git push origin main".to_string(),
            stderr: "! [rejected] main -> main (fetch first)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`git push origin main` failed: ! [rejected] main -> main (fetch first)"
        );
    }
}
