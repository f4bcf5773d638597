//! GitHub operations through the `gh` CLI.

use std::path::PathBuf;
use std::process::Command;

use releaser_plugin::{PluginError, PluginResult};
use tracing::debug;

/// Runs `gh` commands for one checkout, authenticated with a token.
#[derive(Clone)]
pub struct GhCli {
    repo_path: PathBuf,
    token: String,
}

impl GhCli {
    /// Creates a runner for the checkout at `repo_path`.
    #[must_use]
    pub fn new(repo_path: impl Into<PathBuf>, token: impl Into<String>) -> Self {
        Self {
            repo_path: repo_path.into(),
            token: token.into(),
        }
    }

    /// Arguments for `gh release create`.
    #[must_use]
    pub fn release_args(tag: &str, notes: &str, draft: bool, prerelease: bool) -> Vec<String> {
        let mut args = vec![
            "release".to_string(),
            "create".to_string(),
            tag.to_string(),
            "--notes".to_string(),
            notes.to_string(),
        ];
        if draft {
            args.push("--draft".to_string());
        }
        if prerelease {
            args.push("--prerelease".to_string());
        }
        args
    }

    /// Arguments for `gh pr create`.
    #[must_use]
    pub fn pr_args(title: &str, body: &str, head: &str, base: &str) -> Vec<String> {
        [
            "pr", "create", "--title", title, "--body", body, "--head", head, "--base", base,
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    /// Creates a GitHub release for `tag` with `notes` as its body.
    ///
    /// # Errors
    ///
    /// Returns an error if `gh` cannot be run or exits unsuccessfully.
    pub fn create_release(
        &self,
        tag: &str,
        notes: &str,
        draft: bool,
        prerelease: bool,
    ) -> PluginResult<()> {
        self.run(
            &Self::release_args(tag, notes, draft, prerelease),
            &format!("gh release create {tag}"),
        )?;
        Ok(())
    }

    /// Opens a pull request from `head` into `base` and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `gh` cannot be run or exits unsuccessfully.
    pub fn create_pr(
        &self,
        title: &str,
        body: &str,
        head: &str,
        base: &str,
    ) -> PluginResult<String> {
        let output = self.run(
            &Self::pr_args(title, body, head, base),
            &format!("gh pr create --head {head} --base {base}"),
        )?;
        Ok(output.trim().to_string())
    }

    /// Runs `gh` with `args`, reporting failures as `description`.
    fn run(&self, args: &[String], description: &str) -> PluginResult<String> {
        debug!(command = %description, "running gh");

        let output = Command::new("gh")
            .args(args)
            .current_dir(&self.repo_path)
            .env("GH_TOKEN", &self.token)
            .output()
            .map_err(|err| PluginError::CommandFailed {
                command: description.to_string(),
                stderr: err.to_string(),
            })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PluginError::CommandFailed {
                command: description.to_string(),
                stderr: format!("{stdout}{stderr}").trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl std::fmt::Debug for GhCli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhCli")
            .field("repo_path", &self.repo_path)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_release_args() {
        assert_eq!(
            GhCli::release_args("v1.0.0", "## v1.0.0", false, false),
            vec!["release", "create", "v1.0.0", "--notes", "## v1.0.0"]
        );
    }

    #[test]
    fn test_release_args_flags() {
        let args = GhCli::release_args("v2.0.0-rc.1", "notes", true, true);
        assert!(args.ends_with(&["--draft".to_string(), "--prerelease".to_string()]));
    }

    #[test]
    fn test_pr_args() {
        assert_eq!(
            GhCli::pr_args("title", "body", "chore/changelog-v1.0.0", "main"),
            vec![
                "pr",
                "create",
                "--title",
                "title",
                "--body",
                "body",
                "--head",
                "chore/changelog-v1.0.0",
                "--base",
                "main",
            ]
        );
    }

    #[test]
    fn test_notes_are_a_single_argument() {
        let notes = "## v1.0.0\n\n### Features\n\n- add X";
        let args = GhCli::release_args("v1.0.0", notes, false, false);
        assert_eq!(args[4], notes);
    }

    #[test]
    fn test_debug_redacts_token() {
        let gh = GhCli::new("/tmp/repo", "s3cret");
        let debug = format!("{gh:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_failure_reports_command() {
        // Either `gh` is missing or it fails outside a GitHub checkout.
        let temp_dir = TempDir::new().unwrap();
        let gh = GhCli::new(temp_dir.path(), "invalid-token");

        match gh.create_release("v0.0.0-test", "notes", true, false) {
            Err(PluginError::CommandFailed { command, .. }) => {
                assert_eq!(command, "gh release create v0.0.0-test");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }
}
