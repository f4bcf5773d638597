//! Git repository wrapper.

use std::path::Path;

use git2::{DescribeFormatOptions, DescribeOptions, Oid, Repository as Git2Repo, Sort};
use releaser_commit::Commit;
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper for reading history.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Finds the repository containing `path`, searching parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the tag the release range for `current` starts from.
    ///
    /// This is the nearest tag reachable from the parent of `current`. When
    /// no such tag exists the root commit hash is returned instead, so the
    /// range covers the whole history.
    ///
    /// # Errors
    ///
    /// Returns an error if `current` cannot be resolved or the history is empty.
    pub fn previous_tag(&self, current: &str) -> GitResult<String> {
        match self.describe_tag(&format!("{current}^")) {
            Ok(tag) => {
                debug!(%current, previous = %tag, "found previous tag");
                Ok(tag)
            }
            Err(err) => {
                debug!(%current, error = %err, "no previous tag, using root commit");
                self.root_commit(current)
            }
        }
    }

    /// Returns the hash of the oldest root commit reachable from `rev`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rev` cannot be resolved.
    pub fn root_commit(&self, rev: &str) -> GitResult<String> {
        let start = self.resolve_commit(rev)?;

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.push(start)?;

        for oid in revwalk {
            let oid = oid?;
            if self.inner.find_commit(oid)?.parent_count() == 0 {
                return Ok(oid.to_string());
            }
        }

        Err(GitError::NoCommits)
    }

    /// Returns the commits reachable from `to` but not from `from`.
    ///
    /// Commits are ordered newest first, like `git log from..to`. Each
    /// message is the commit summary: the first paragraph of the message
    /// on a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if either revision cannot be resolved or the history
    /// cannot be walked.
    pub fn commits_between(&self, from: &str, to: &str) -> GitResult<Vec<Commit>> {
        let to_oid = self.resolve_commit(to)?;
        let from_oid = self.resolve_commit(from)?;

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_oid)?;
        revwalk.hide(from_oid)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;
            let summary = commit.summary().unwrap_or_default();

            commits.push(Commit::new(oid.to_string(), summary));
        }

        debug!(%from, %to, count = commits.len(), "read commit range");
        Ok(commits)
    }

    /// Describes `rev` with the nearest tag, without any suffix.
    fn describe_tag(&self, rev: &str) -> GitResult<String> {
        let object = self.inner.revparse_single(rev)?;

        let mut options = DescribeOptions::new();
        options.describe_tags();
        let describe = object.describe(&options)?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        Ok(describe.format(Some(&format))?)
    }

    /// Resolves a revision (tag, branch, hash) to the commit it points at.
    fn resolve_commit(&self, rev: &str) -> GitResult<Oid> {
        let object = self
            .inner
            .revparse_single(rev)
            .map_err(|_| GitError::TagNotFound(rev.to_string()))?;
        Ok(object.peel_to_commit()?.id())
    }
}
