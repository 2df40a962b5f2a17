//! # Snapshot Models
//!
//! A snapshot is a named, typed (Pre/Post) collection of MAC table
//! observations captured around a cutover. Snapshots are immutable once
//! written: the store publishes them atomically and comparisons only
//! ever read them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::network::mac::MacAddr;

/// Which side of the cutover a snapshot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotKind {
    Pre,
    Post,
}

impl SnapshotKind {
    pub const fn label(&self) -> &'static str {
        match self {
            SnapshotKind::Pre => "Pre",
            SnapshotKind::Post => "Post",
        }
    }

}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SnapshotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" => Ok(SnapshotKind::Pre),
            "post" => Ok(SnapshotKind::Post),
            other => Err(format!("invalid snapshot kind: {other} (expected pre or post)")),
        }
    }
}

/// One observed endpoint binding: an address seen on a port, optionally
/// inside a VLAN.
///
/// Comparison identity is the address alone; `port` and `vlan` are
/// descriptive attributes carried along so moves and retags can be
/// annotated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MacEntry {
    pub mac: MacAddr,
    pub port: String,
    pub vlan: Option<u16>,
}

impl MacEntry {
    pub fn new(mac: MacAddr, port: impl Into<String>, vlan: Option<u16>) -> Self {
        Self {
            mac,
            port: port.into(),
            vlan,
        }
    }
}

/// Identity and bookkeeping of one stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    pub name: String,
    pub kind: SnapshotKind,
    /// Capture timestamp, `YYYY-MM-DD_HH.MM.SS`. Lexical order is
    /// chronological order, which is what "newest" selection relies on.
    pub taken_at: String,
    pub entry_count: usize,
}

impl SnapshotMeta {
    /// The on-disk folder label, `[Kind]_[name]_[timestamp]`.
    pub fn folder_label(&self) -> String {
        format!("[{}]_[{}]_[{}]", self.kind, self.name, self.taken_at)
    }

    /// Parses a folder label back into its parts. Returns `None` for
    /// anything that does not follow the bracket scheme.
    pub fn parse_folder_label(label: &str) -> Option<(SnapshotKind, String, String)> {
        let inner = label.strip_prefix('[')?.strip_suffix(']')?;
        let mut parts = inner.split("]_[");
        let kind: SnapshotKind = parts.next()?.parse().ok()?;
        let name = parts.next()?;
        let taken_at = parts.next()?;
        if parts.next().is_some() || name.is_empty() || taken_at.is_empty() {
            return None;
        }
        Some((kind, name.to_string(), taken_at.to_string()))
    }
}

/// A fully loaded snapshot: metadata plus every observation, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub meta: SnapshotMeta,
    pub entries: Vec<MacEntry>,
}

impl Snapshot {
    /// Builds a snapshot with its stable entry order: sorted by
    /// (mac, port, vlan), exact duplicates collapsed. Distinct
    /// observations of the same address (a flap, or a move caught
    /// mid-capture) are all kept.
    pub fn new(
        name: impl Into<String>,
        kind: SnapshotKind,
        taken_at: impl Into<String>,
        mut entries: Vec<MacEntry>,
    ) -> Self {
        entries.sort();
        entries.dedup();
        Self {
            meta: SnapshotMeta {
                name: name.into(),
                kind,
                taken_at: taken_at.into(),
                entry_count: entries.len(),
            },
            entries,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
