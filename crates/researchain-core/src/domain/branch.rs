//! Update-branch naming.

use std::fmt;

use chrono::NaiveDate;

use crate::ports::CoreError;

/// Maximum number of characters of the sanitized comment kept in a branch name.
pub const MAX_COMMENT_CHARS: usize = 50;

/// Date layout used inside branch names (`20250508`).
const BRANCH_DATE_FORMAT: &str = "%Y%m%d";

/// A branch name of the form `update-<YYYYMMDD>-<sanitized-comment>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    /// Build the update branch name for `comment` on `date`.
    ///
    /// Fails with [`CoreError::Validation`] when the comment is blank.
    pub fn for_update(comment: &str, date: NaiveDate) -> Result<Self, CoreError> {
        if comment.trim().is_empty() {
            return Err(CoreError::Validation(
                "comment must not be empty".to_string(),
            ));
        }

        Ok(Self(format!(
            "update-{}-{}",
            date.format(BRANCH_DATE_FORMAT),
            sanitize_comment(comment)
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Replace whitespace with `-` and keep at most [`MAX_COMMENT_CHARS`] characters.
///
/// Truncation counts characters, so multi-byte comments are never split
/// inside a code point.
pub fn sanitize_comment(comment: &str) -> String {
    comment
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .take(MAX_COMMENT_CHARS)
        .collect()
}
