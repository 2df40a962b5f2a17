//! The workspace error taxonomy.
//!
//! Every failure is scoped to the single operation that raised it:
//! malformed capture records are collected per line while the load
//! continues, structural errors (wrong snapshot kind, missing snapshot,
//! storage trouble) abort the one requested operation and carry enough
//! context for the operator to act on.

use std::path::PathBuf;

use thiserror::Error;

use crate::network::mac::MacParseError;
use crate::snapshot::SnapshotKind;

pub type Result<T> = std::result::Result<T, Error>;

/// What is wrong with one capture record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryDefect {
    #[error(transparent)]
    Address(#[from] MacParseError),
    #[error("record has no port field")]
    MissingPort,
}

#[derive(Debug, Error)]
pub enum Error {
    /// A capture record failed validation. Reported per record; the
    /// load keeps going.
    #[error("line {line} (`{content}`): {defect}")]
    MalformedEntry {
        line: usize,
        content: String,
        defect: EntryDefect,
    },

    /// A comparison was invoked with a snapshot on the wrong side.
    #[error("snapshot `{name}` is tagged {actual}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: SnapshotKind,
        actual: SnapshotKind,
    },

    /// A selection referenced a snapshot the store no longer holds.
    #[error("snapshot `{name}` not found")]
    SnapshotNotFound { name: String },

    /// A label cannot become a snapshot folder name.
    #[error("snapshot name `{name}` is invalid: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Creating a snapshot would overwrite an existing one; snapshots
    /// are immutable, so this is refused rather than merged.
    #[error("snapshot `{label}` already exists")]
    AlreadyExists { label: String },

    /// The snapshot or report tree cannot be read or written. Surfaced
    /// verbatim; these are operator-actionable environment problems.
    #[error("storage failure while {op} `{}`", .path.display())]
    Storage {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn storage(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Storage {
            op,
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, content: impl Into<String>, defect: EntryDefect) -> Self {
        Error::MalformedEntry {
            line,
            content: content.into(),
            defect,
        }
    }
}
