//! Changelog file insertion.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

/// Inserts `section` into `existing` changelog content.
///
/// The section goes on the line after the first `anchor`, above earlier
/// releases. Without an anchor, the anchor and the section are prepended and
/// the existing content is kept below them.
#[must_use]
pub fn insert_changelog(existing: &str, section: &str, anchor: &str) -> String {
    if let Some(index) = existing.find(anchor) {
        let (head, tail) = existing.split_at(index + anchor.len());
        return format!("{head}\n{section}{tail}");
    }

    format!("{anchor}\n\n{section}\n\n{existing}")
}

/// Inserts `section` into the changelog file at `path`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or cannot be
/// written.
pub fn update_changelog_file(path: &Path, section: &str, anchor: &str) -> std::io::Result<()> {
    let existing = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err),
    };

    debug!(?path, existing_len = existing.len(), "updating changelog file");
    std::fs::write(path, insert_changelog(&existing, section, anchor))
}
