//! The closed set of operations and their validation.
//!
//! Every command surface resolves an [`OperationKind`] and funnels its raw
//! flags into [`Operation::from_kind`], so a missing or malformed flag is
//! rejected here, before any handler runs.

use std::fmt;

use chrono::NaiveDate;

use crate::ports::CoreError;

/// The four supported operations, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Init,
    Update,
    Change,
    AutoSet,
}

impl OperationKind {
    /// Canonical command name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Update => "update",
            Self::Change => "change",
            Self::AutoSet => "auto_set",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw flag values as they arrive from a command surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFlags {
    pub comment: Option<String>,
    pub date: Option<String>,
    pub branch: Option<String>,
}

/// A validated invocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Init,
    Update {
        comment: String,
        date: Option<NaiveDate>,
    },
    Change {
        branch: String,
    },
    AutoSet,
}

impl Operation {
    /// Validate the flags of a resolved [`OperationKind`] into an [`Operation`].
    pub fn from_kind(kind: OperationKind, flags: RequestFlags) -> Result<Self, CoreError> {
        match kind {
            OperationKind::Init => Ok(Self::Init),
            OperationKind::Update => {
                let comment = required("comment", flags.comment)?;
                let date = flags.date.as_deref().map(parse_date).transpose()?;
                Ok(Self::Update { comment, date })
            }
            OperationKind::Change => {
                let branch = required("branch", flags.branch)?;
                Ok(Self::Change { branch })
            }
            OperationKind::AutoSet => Ok(Self::AutoSet),
        }
    }

    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Init => OperationKind::Init,
            Self::Update { .. } => OperationKind::Update,
            Self::Change { .. } => OperationKind::Change,
            Self::AutoSet => OperationKind::AutoSet,
        }
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(CoreError::Validation(format!("'{field}' must not be empty"))),
        None => Err(CoreError::Validation(format!("missing required '{field}'"))),
    }
}

/// Parse an 8-digit `YYYYMMDD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    let invalid = || {
        CoreError::Validation(format!(
            "invalid 'date' '{value}': expected 8 digits in YYYYMMDD form"
        ))
    };

    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(comment: Option<&str>, date: Option<&str>, branch: Option<&str>) -> RequestFlags {
        RequestFlags {
            comment: comment.map(str::to_string),
            date: date.map(str::to_string),
            branch: branch.map(str::to_string),
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(OperationKind::Init.to_string(), "init");
        assert_eq!(OperationKind::Update.to_string(), "update");
        assert_eq!(OperationKind::Change.to_string(), "change");
        assert_eq!(OperationKind::AutoSet.to_string(), "auto_set");
    }

    #[test]
    fn test_update_requires_comment() {
        let err = Operation::from_kind(OperationKind::Update, flags(None, Some("20250508"), None))
            .unwrap_err();
        match err {
            CoreError::Validation(msg) => assert!(msg.contains("comment")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_update_with_date() {
        let op = Operation::from_kind(
            OperationKind::Update,
            flags(Some("bugfix"), Some("20250508"), None),
        )
        .unwrap();
        assert_eq!(
            op,
            Operation::Update {
                comment: "bugfix".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 5, 8),
            }
        );
        assert_eq!(op.kind(), OperationKind::Update);
    }

    #[test]
    fn test_update_without_date() {
        let op =
            Operation::from_kind(OperationKind::Update, flags(Some("bugfix"), None, None)).unwrap();
        assert!(matches!(op, Operation::Update { date: None, .. }));
    }

    #[test]
    fn test_change_requires_branch() {
        let err = Operation::from_kind(OperationKind::Change, RequestFlags::default()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("branch")));

        let err =
            Operation::from_kind(OperationKind::Change, flags(None, None, Some(" "))).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_flagless_operations() {
        assert_eq!(
            Operation::from_kind(OperationKind::Init, RequestFlags::default()).unwrap(),
            Operation::Init
        );
        assert_eq!(
            Operation::from_kind(OperationKind::AutoSet, RequestFlags::default()).unwrap(),
            Operation::AutoSet
        );
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("20250508").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 8).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        for bad in ["2025-05-08", "2025058", "202505081", "20251332", "abcdefgh", "", "+2025050"] {
            assert!(parse_date(bad).is_err(), "{bad} should be rejected");
        }
    }
}
