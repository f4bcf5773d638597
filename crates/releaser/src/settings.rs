//! Run settings resolved from flags, environment and `releaser.toml`.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use releaser_config::{Config, load_or_default};
use tracing::debug;

use crate::commands::{PublishArgs, SourceArgs};

const TAG_REF_PREFIX: &str = "refs/tags/";

/// Everything a command needs, with precedence already applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub repo_path: PathBuf,
    pub tag: String,
    pub adapter: String,
    pub pattern: Option<String>,
    pub main_branch: String,
    pub changelog_path: String,
    pub anchor: String,
    pub direct_push: bool,
    pub draft: bool,
    pub prerelease: bool,
    pub dry_run: bool,
}

/// GitHub access needed by the publishing commands.
#[derive(Clone)]
pub struct Credentials {
    pub token: String,
    pub repository: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .finish()
    }
}

impl Settings {
    /// Resolves settings for a command that only reads history.
    pub fn from_source(args: &SourceArgs) -> Result<Self> {
        let repo_path = std::fs::canonicalize(&args.repo)
            .with_context(|| format!("repository path not found: {}", args.repo.display()))?;
        let config = load_or_default(&repo_path).context("failed to load configuration")?;

        Self::merge(args, &config, repo_path)
    }

    /// Resolves settings for `pr` and `release`, layering the publishing flags.
    pub fn from_publish(args: &PublishArgs) -> Result<(Self, Credentials)> {
        let mut settings = Self::from_source(&args.source)?;

        if let Some(branch) = non_empty(args.main_branch.as_deref()) {
            settings.main_branch = branch.to_string();
        }
        if let Some(path) = non_empty(args.changelog_path.as_deref()) {
            settings.changelog_path = path.to_string();
        }
        settings.direct_push |= args.direct_push;
        settings.draft |= args.draft;
        settings.prerelease |= args.prerelease;
        settings.dry_run = args.dry_run;

        let credentials = Credentials::resolve(args)?;
        debug!(?settings, repository = %credentials.repository, "resolved settings");
        Ok((settings, credentials))
    }

    fn merge(args: &SourceArgs, config: &Config, repo_path: PathBuf) -> Result<Self> {
        let Some(reference) = non_empty(args.tag.as_deref()) else {
            bail!("a tag is required: pass --tag or set GITHUB_REF");
        };

        let adapter = non_empty(args.adapter.as_deref()).unwrap_or(&config.parser.name);
        let pattern = non_empty(args.pattern.as_deref()).or(config.parser.pattern.as_deref());

        Ok(Self {
            repo_path,
            tag: tag_from_ref(reference).to_string(),
            adapter: adapter.to_string(),
            pattern: pattern.map(String::from),
            main_branch: config.git.main_branch.clone(),
            changelog_path: config.changelog.path.clone(),
            anchor: config.changelog.anchor.clone(),
            direct_push: config.git.direct_push,
            draft: config.release.draft,
            prerelease: config.release.prerelease,
            dry_run: false,
        })
    }
}

impl Credentials {
    fn resolve(args: &PublishArgs) -> Result<Self> {
        let Some(token) = non_empty(args.token.as_deref()) else {
            bail!("GITHUB_TOKEN is required: pass --token or set GITHUB_TOKEN");
        };
        let Some(repository) = non_empty(args.repository.as_deref()) else {
            bail!("GITHUB_REPOSITORY is required: pass --repository or set GITHUB_REPOSITORY");
        };

        Ok(Self {
            token: token.to_string(),
            repository: repository.to_string(),
        })
    }
}

/// Strips the `refs/tags/` prefix GitHub puts on tag refs.
pub fn tag_from_ref(reference: &str) -> &str {
    reference.strip_prefix(TAG_REF_PREFIX).unwrap_or(reference)
}

/// Treats blank values as unset; Actions passes unset inputs as empty strings.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source(tag: Option<&str>) -> SourceArgs {
        SourceArgs {
            repo: PathBuf::from("."),
            tag: tag.map(String::from),
            adapter: None,
            pattern: None,
        }
    }

    #[test]
    fn test_tag_from_ref() {
        assert_eq!(tag_from_ref("refs/tags/v1.2.0"), "v1.2.0");
        assert_eq!(tag_from_ref("v1.2.0"), "v1.2.0");
        assert_eq!(tag_from_ref("refs/heads/main"), "refs/heads/main");
    }

    #[test]
    fn test_merge_defaults() {
        let settings =
            Settings::merge(&source(Some("refs/tags/v1.0.0")), &Config::default(), ".".into())
                .unwrap();

        assert_eq!(settings.tag, "v1.0.0");
        assert_eq!(settings.adapter, "conventional");
        assert!(settings.pattern.is_none());
        assert_eq!(settings.main_branch, "main");
        assert_eq!(settings.changelog_path, "CHANGELOG.md");
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_merge_requires_tag() {
        let err = Settings::merge(&source(None), &Config::default(), ".".into()).unwrap_err();
        assert!(err.to_string().contains("tag is required"));

        let err = Settings::merge(&source(Some("")), &Config::default(), ".".into()).unwrap_err();
        assert!(err.to_string().contains("tag is required"));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.parser.name = "simple".to_string();
        config.parser.pattern = Some("from-config".to_string());

        let mut args = source(Some("v1.0.0"));
        args.adapter = Some("regex".to_string());
        args.pattern = Some(r"^(\w+): (.+)$".to_string());

        let settings = Settings::merge(&args, &config, ".".into()).unwrap();
        assert_eq!(settings.adapter, "regex");
        assert_eq!(settings.pattern.as_deref(), Some(r"^(\w+): (.+)$"));
    }

    #[test]
    fn test_empty_flags_fall_back_to_config() {
        let mut config = Config::default();
        config.parser.name = "simple".to_string();

        let mut args = source(Some("v1.0.0"));
        args.adapter = Some(String::new());

        let settings = Settings::merge(&args, &config, ".".into()).unwrap();
        assert_eq!(settings.adapter, "simple");
    }

    #[test]
    fn test_from_source_reads_config_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("releaser.toml"),
            "[changelog]\npath = \"docs/CHANGES.md\"\n",
        )
        .unwrap();

        let mut args = source(Some("v1.0.0"));
        args.repo = temp_dir.path().to_path_buf();

        let settings = Settings::from_source(&args).unwrap();
        assert_eq!(settings.changelog_path, "docs/CHANGES.md");
    }

    #[test]
    fn test_credentials_required() {
        let mut args = PublishArgs {
            source: source(Some("v1.0.0")),
            token: None,
            repository: Some("octo/repo".to_string()),
            main_branch: None,
            changelog_path: None,
            direct_push: false,
            draft: false,
            prerelease: false,
            dry_run: false,
        };
        let err = Credentials::resolve(&args).unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));

        args.token = Some("s3cret".to_string());
        args.repository = None;
        let err = Credentials::resolve(&args).unwrap_err();
        assert!(err.to_string().contains("GITHUB_REPOSITORY"));

        args.repository = Some("octo/repo".to_string());
        let credentials = Credentials::resolve(&args).unwrap();
        assert!(!format!("{credentials:?}").contains("s3cret"));
    }
}
