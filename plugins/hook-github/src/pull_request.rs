//! Changelog pull-request hook.

use std::path::Path;

use releaser_git::GitCli;
use releaser_plugin::{Plugin, PluginError, PluginResult, ReleaseContext, ReleaseHook};
use tracing::{info, warn};

use crate::{GhCli, git_error, rendered_notes, update_changelog_file};

/// Commits the rendered section into the changelog file and proposes it as a
/// pull request against the main branch.
///
/// With direct push enabled the commit is pushed to the main branch instead,
/// and a pull request is only opened when that push is rejected.
#[derive(Debug)]
pub struct ChangelogPullRequestHook {
    token: String,
    main_branch: String,
    changelog_path: String,
    anchor: String,
    direct_push: bool,
}

impl ChangelogPullRequestHook {
    /// Creates a new hook authenticated with `token`.
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        main_branch: impl Into<String>,
        changelog_path: impl Into<String>,
        anchor: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            main_branch: main_branch.into(),
            changelog_path: changelog_path.into(),
            anchor: anchor.into(),
            direct_push: false,
        }
    }

    /// Pushes straight to the main branch when possible.
    #[must_use]
    pub fn with_direct_push(mut self, direct_push: bool) -> Self {
        self.direct_push = direct_push;
        self
    }

    /// Returns whether direct push is enabled.
    #[must_use]
    pub fn is_direct_push(&self) -> bool {
        self.direct_push
    }

    /// Branch carrying the changelog update for `tag`.
    #[must_use]
    pub fn branch_name(tag: &str) -> String {
        format!("chore/changelog-{tag}")
    }

    /// Message of the changelog commit for `tag`.
    #[must_use]
    pub fn commit_message(tag: &str) -> String {
        format!("docs: release {tag} [skip ci]")
    }

    /// Title of the pull request for `tag`.
    #[must_use]
    pub fn pr_title(tag: &str) -> String {
        format!("docs: update changelog for {tag}")
    }

    /// Body of the pull request for `tag`.
    #[must_use]
    pub fn pr_body(tag: &str, notes: &str) -> String {
        format!("Automated changelog update for release {tag}\n\n## Changes:\n\n{notes}")
    }

    /// Rejects a changelog path outside the checkout.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::ConfigError`] if the path is absolute.
    pub fn check_changelog_path(&self) -> PluginResult<()> {
        // `git add` runs inside the checkout
        if Path::new(&self.changelog_path).is_absolute() {
            return Err(PluginError::ConfigError(format!(
                "changelog path must be relative to the repository: {}",
                self.changelog_path
            )));
        }
        Ok(())
    }

    /// Checks out and updates the main branch, then commits the section.
    ///
    /// When `branch` is given the commit is made on that new branch.
    fn commit_changelog(
        &self,
        git: &GitCli,
        ctx: &ReleaseContext,
        notes: &str,
        branch: Option<&str>,
    ) -> PluginResult<()> {
        git.checkout(&self.main_branch).map_err(git_error)?;
        git.pull(&self.main_branch).map_err(git_error)?;

        if let Some(branch) = branch {
            git.create_branch(branch).map_err(git_error)?;
        }

        update_changelog_file(
            &ctx.repo_path.join(&self.changelog_path),
            notes,
            &self.anchor,
        )?;

        git.add(&[self.changelog_path.as_str()]).map_err(git_error)?;
        git.commit(&Self::commit_message(&ctx.tag)).map_err(git_error)?;
        Ok(())
    }

    /// Pushes `branch` and opens the pull request from it.
    fn open_pull_request(
        &self,
        git: &GitCli,
        ctx: &ReleaseContext,
        notes: &str,
        branch: &str,
    ) -> PluginResult<()> {
        git.push(branch).map_err(git_error)?;

        let url = GhCli::new(&ctx.repo_path, &self.token).create_pr(
            &Self::pr_title(&ctx.tag),
            &Self::pr_body(&ctx.tag, notes),
            branch,
            &self.main_branch,
        )?;

        info!(%url, "created pull request for changelog update");
        Ok(())
    }
}

impl Plugin for ChangelogPullRequestHook {
    fn name(&self) -> &'static str {
        "changelog-pull-request"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Commits the changelog section and opens a pull request for it"
    }
}

impl ReleaseHook for ChangelogPullRequestHook {
    fn on_publish(&self, ctx: &mut ReleaseContext) -> PluginResult<()> {
        let notes = rendered_notes(ctx)?;
        let branch = Self::branch_name(&ctx.tag);
        self.check_changelog_path()?;

        if ctx.dry_run {
            info!(
                tag = %ctx.tag,
                %branch,
                base = %self.main_branch,
                path = %self.changelog_path,
                direct_push = self.direct_push,
                "dry run: would update changelog and open pull request"
            );
            return Ok(());
        }

        let git = GitCli::new(&ctx.repo_path);

        if !self.direct_push {
            self.commit_changelog(&git, ctx, notes, Some(&branch))?;
            return self.open_pull_request(&git, ctx, notes, &branch);
        }

        self.commit_changelog(&git, ctx, notes, None)?;
        match git.push(&self.main_branch) {
            Ok(()) => {
                info!(branch = %self.main_branch, "pushed changelog update");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "push to main branch rejected, opening pull request");
                git.create_branch(&branch).map_err(git_error)?;
                self.open_pull_request(&git, ctx, notes, &branch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    const ANCHOR: &str = "<!-- auto-releaser-start -->";
    const NOTES: &str = "## v1.1.0\n\n### Features\n\n- add X";

    fn git(dir: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .expect("failed to run git");
        assert!(output.status.success(), "git {args:?} failed");
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// A working clone of a bare `origin`, on `main` with one commit.
    fn setup_clone() -> (TempDir, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let origin = temp_dir.path().join("origin.git");
        let work = temp_dir.path().join("work");

        git(temp_dir.path(), &["init", "--bare", "origin.git"]);
        git(&origin, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(temp_dir.path(), &["clone", "origin.git", "work"]);
        git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(&work, &["config", "user.email", "test@example.com"]);
        git(&work, &["config", "user.name", "Test User"]);
        git(&work, &["config", "commit.gpgsign", "false"]);

        fs::write(work.join("CHANGELOG.md"), format!("# Changelog\n\n{ANCHOR}\n")).unwrap();
        git(&work, &["add", "CHANGELOG.md"]);
        git(&work, &["commit", "-m", "initial"]);
        git(&work, &["push", "origin", "main"]);

        (temp_dir, work)
    }

    fn hook() -> ChangelogPullRequestHook {
        ChangelogPullRequestHook::new("token", "main", "CHANGELOG.md", ANCHOR)
    }

    fn context(work: &Path, dry_run: bool) -> ReleaseContext {
        ReleaseContext::new(work, "v1.1.0", "v1.0.0", vec![])
            .with_changelog(NOTES)
            .dry_run(dry_run)
    }

    #[test]
    fn test_naming() {
        assert_eq!(
            ChangelogPullRequestHook::branch_name("v1.2.0"),
            "chore/changelog-v1.2.0"
        );
        assert_eq!(
            ChangelogPullRequestHook::commit_message("v1.2.0"),
            "docs: release v1.2.0 [skip ci]"
        );
        assert_eq!(
            ChangelogPullRequestHook::pr_title("v1.2.0"),
            "docs: update changelog for v1.2.0"
        );
    }

    #[test]
    fn test_pr_body() {
        assert_eq!(
            ChangelogPullRequestHook::pr_body("v1.2.0", "## v1.2.0\n\n- x"),
            "Automated changelog update for release v1.2.0\n\n## Changes:\n\n## v1.2.0\n\n- x"
        );
    }

    #[test]
    fn test_plugin_metadata() {
        let hook = hook();
        assert_eq!(hook.name(), "changelog-pull-request");
        assert_eq!(hook.version(), env!("CARGO_PKG_VERSION"));
        assert!(!hook.is_direct_push());
        assert!(hook.with_direct_push(true).is_direct_push());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let (_temp_dir, work) = setup_clone();
        let before = fs::read_to_string(work.join("CHANGELOG.md")).unwrap();

        hook().on_publish(&mut context(&work, true)).unwrap();

        assert_eq!(fs::read_to_string(work.join("CHANGELOG.md")).unwrap(), before);
        assert_eq!(git(&work, &["rev-parse", "--abbrev-ref", "HEAD"]), "main");
    }

    #[test]
    fn test_check_changelog_path() {
        assert!(hook().check_changelog_path().is_ok());

        let nested = ChangelogPullRequestHook::new("token", "main", "docs/CHANGES.md", ANCHOR);
        assert!(nested.check_changelog_path().is_ok());

        let absolute = ChangelogPullRequestHook::new("token", "main", "/etc/CHANGELOG.md", ANCHOR);
        assert!(matches!(
            absolute.check_changelog_path(),
            Err(PluginError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rejects_absolute_changelog_path() {
        let hook = ChangelogPullRequestHook::new("token", "main", "/etc/CHANGELOG.md", ANCHOR);
        let mut ctx = ReleaseContext::new("/tmp", "v1.0.0", "v0.9.0", vec![])
            .with_changelog(NOTES)
            .dry_run(true);

        let result = hook.on_publish(&mut ctx);
        assert!(matches!(result, Err(PluginError::ConfigError(_))));
    }

    #[test]
    fn test_requires_changelog() {
        let mut ctx = ReleaseContext::new("/tmp", "v1.0.0", "v0.9.0", vec![]).dry_run(true);
        let result = hook().on_publish(&mut ctx);
        assert!(matches!(result, Err(PluginError::ExecutionFailed(_))));
    }

    #[test]
    fn test_pull_request_flow_commits_on_branch() {
        let (_temp_dir, work) = setup_clone();

        // Everything up to `gh pr create` runs against the local origin.
        let result = hook().on_publish(&mut context(&work, false));
        assert!(matches!(
            result,
            Err(PluginError::CommandFailed { ref command, .. }) if command.starts_with("gh pr create")
        ));

        assert_eq!(
            git(&work, &["rev-parse", "--abbrev-ref", "HEAD"]),
            "chore/changelog-v1.1.0"
        );
        assert_eq!(
            git(&work, &["log", "-1", "--format=%s"]),
            "docs: release v1.1.0 [skip ci]"
        );
        assert_eq!(
            fs::read_to_string(work.join("CHANGELOG.md")).unwrap(),
            format!("# Changelog\n\n{ANCHOR}\n{NOTES}\n")
        );

        let remote_branches = git(&work, &["ls-remote", "--heads", "origin"]);
        assert!(remote_branches.contains("refs/heads/chore/changelog-v1.1.0"));
    }

    #[test]
    fn test_direct_push_updates_main() {
        let (_temp_dir, work) = setup_clone();

        hook()
            .with_direct_push(true)
            .on_publish(&mut context(&work, false))
            .unwrap();

        assert_eq!(git(&work, &["rev-parse", "--abbrev-ref", "HEAD"]), "main");
        assert_eq!(
            git(&work, &["log", "-1", "--format=%s", "origin/main"]),
            "docs: release v1.1.0 [skip ci]"
        );
    }
}
