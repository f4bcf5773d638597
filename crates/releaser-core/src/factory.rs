//! Classifier selection by name.

use releaser_classifier_conventional::ConventionalClassifier;
use releaser_classifier_regex::RegexClassifier;
use releaser_classifier_simple::SimpleClassifier;
use releaser_plugin::CommitClassifier;
use tracing::debug;

use crate::{CoreError, CoreResult};

/// Names accepted by [`classifier_for`], listed in the unknown-key error.
pub(crate) const AVAILABLE_CLASSIFIERS: &[&str] = &["conventional", "regex", "simple"];

/// Builds the classifier registered under `key`.
///
/// `pattern` is only read by the `regex` classifier, which requires it.
///
/// # Errors
///
/// Returns an error if the key is unknown, or if the `regex` classifier is
/// requested without a pattern or with one that does not compile.
pub fn classifier_for(key: &str, pattern: Option<&str>) -> CoreResult<Box<dyn CommitClassifier>> {
    let classifier: Box<dyn CommitClassifier> = match key {
        "conventional" => Box::new(ConventionalClassifier::new()),
        "regex" => {
            let pattern = pattern
                .filter(|p| !p.is_empty())
                .ok_or(CoreError::MissingPattern)?;
            Box::new(RegexClassifier::new(pattern)?)
        }
        "simple" => Box::new(SimpleClassifier::new()),
        other => return Err(CoreError::UnknownStrategy(other.to_string())),
    };

    debug!(classifier = classifier.name(), "selected classifier");
    Ok(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use releaser_commit::Commit;

    #[test]
    fn test_all_available_classifiers_resolve() {
        for key in AVAILABLE_CLASSIFIERS {
            let classifier = classifier_for(key, Some(r"^(\w+): (.+)$")).unwrap();
            assert_eq!(classifier.name(), *key);
        }
    }

    #[test]
    fn test_conventional_ignores_pattern() {
        let classifier = classifier_for("conventional", Some("unused")).unwrap();
        let change = classifier
            .classify(&Commit::new("a", "feat: add X"))
            .unwrap();
        assert_eq!(change.category, "feat");
    }

    #[test]
    fn test_regex_uses_pattern() {
        let classifier = classifier_for("regex", Some(r"^\[(\w+)\] (.+)$")).unwrap();
        let change = classifier
            .classify(&Commit::new("a", "[ui] new button"))
            .unwrap();
        assert_eq!(change.category, "ui");
        assert_eq!(change.content, "new button");
    }

    #[test]
    fn test_regex_without_pattern() {
        assert!(matches!(
            classifier_for("regex", None),
            Err(CoreError::MissingPattern)
        ));
        assert!(matches!(
            classifier_for("regex", Some("")),
            Err(CoreError::MissingPattern)
        ));
    }

    #[test]
    fn test_regex_invalid_pattern() {
        assert!(matches!(
            classifier_for("regex", Some("(unclosed")),
            Err(CoreError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_unknown_key() {
        match classifier_for("gitmoji", None) {
            Err(CoreError::UnknownStrategy(key)) => assert_eq!(key, "gitmoji"),
            Err(other) => panic!("expected UnknownStrategy, got {other:?}"),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_conventional_rejects_line_breaks() {
        let classifier = classifier_for("conventional", None).unwrap();
        assert!(classifier.classify(&Commit::new("a", "feat:\nbody")).is_none());
        assert!(classifier.classify(&Commit::new("b", "feat: a\rb")).is_none());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!(classifier_for("Conventional", None).is_err());
    }
}
