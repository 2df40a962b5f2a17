//! # Snapshot Comparator
//!
//! The reason this tool exists: given a Pre snapshot and a Post
//! snapshot, decide which endpoints persisted, which dropped off, and
//! which are new, keyed by MAC address alone.
//!
//! The diff is a pure set reconciliation over key-indexed maps. Both
//! sides are grouped into `BTreeMap<MacAddr, Vec<&MacEntry>>` so
//! duplicate observations of one address (flaps, mid-capture moves) are
//! never collapsed away, and traversal order — and therefore the entire
//! result — is identical on every run.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use macdiff_common::error::{Error, Result};
use macdiff_common::network::mac::MacAddr;
use macdiff_common::snapshot::{MacEntry, Snapshot, SnapshotKind, SnapshotMeta};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One observation of an address: the port it was seen on, and the
/// VLAN if captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub port: String,
    pub vlan: Option<u16>,
}

impl From<&MacEntry> for Observation {
    fn from(entry: &MacEntry) -> Self {
        Self {
            port: entry.port.clone(),
            vlan: entry.vlan,
        }
    }
}

/// One comparison key with every observation of it on one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryGroup {
    pub mac: MacAddr,
    pub seen: Vec<Observation>,
}

/// A retained key whose port set changed between the sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMove {
    pub from: Vec<String>,
    pub to: Vec<String>,
}

impl PortMove {
    /// `Gi1/0/1 -> Gi1/0/5`, multi-port sides joined with commas.
    pub fn describe(&self) -> String {
        format!("{} -> {}", self.from.join(","), self.to.join(","))
    }
}

/// A key present in both snapshots, annotated with what changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainedEntry {
    pub mac: MacAddr,
    pub pre: Vec<Observation>,
    pub post: Vec<Observation>,
    /// Set when the device answers on a different port than before.
    pub moved: Option<PortMove>,
    /// Set when the VLAN set changed while the key survived.
    pub vlan_changed: bool,
}

/// Output of diffing one Pre snapshot against one Post snapshot.
///
/// Invariants, by construction: `retained ∪ missing` is exactly Pre's
/// key set, `retained ∪ added` is exactly Post's key set, and the three
/// lists are pairwise disjoint by key. All lists are sorted by address
/// ascending. Never persisted as authoritative state — always
/// regenerable from the two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub pre: SnapshotMeta,
    pub post: SnapshotMeta,
    pub retained: Vec<RetainedEntry>,
    pub missing: Vec<EntryGroup>,
    pub added: Vec<EntryGroup>,
}

impl ComparisonResult {
    pub fn moved_count(&self) -> usize {
        self.retained.iter().filter(|r| r.moved.is_some()).count()
    }

    /// A clean cutover: nothing dropped off.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Diffs `pre` against `post`.
///
/// Rejects mis-tagged inputs before any computation: comparing two Pre
/// or two Post snapshots is an operator error, not a degenerate diff.
/// Empty snapshots are legitimate — a completely failed cutover reports
/// every Pre key as missing, it does not error.
pub fn compare(pre: &Snapshot, post: &Snapshot) -> Result<ComparisonResult> {
    expect_kind(pre, SnapshotKind::Pre)?;
    expect_kind(post, SnapshotKind::Post)?;

    let pre_keys = group_by_mac(&pre.entries);
    let post_keys = group_by_mac(&post.entries);

    let mut retained: Vec<RetainedEntry> = Vec::new();
    let mut missing: Vec<EntryGroup> = Vec::new();
    let mut added: Vec<EntryGroup> = Vec::new();

    for (mac, pre_seen) in &pre_keys {
        match post_keys.get(mac) {
            Some(post_seen) => retained.push(annotate(*mac, pre_seen, post_seen)),
            None => missing.push(to_group(*mac, pre_seen)),
        }
    }

    for (mac, post_seen) in &post_keys {
        if !pre_keys.contains_key(mac) {
            added.push(to_group(*mac, post_seen));
        }
    }

    debug!(
        retained = retained.len(),
        missing = missing.len(),
        added = added.len(),
        "comparison finished"
    );

    Ok(ComparisonResult {
        pre: pre.meta.clone(),
        post: post.meta.clone(),
        retained,
        missing,
        added,
    })
}

fn expect_kind(snapshot: &Snapshot, expected: SnapshotKind) -> Result<()> {
    if snapshot.meta.kind != expected {
        return Err(Error::TypeMismatch {
            name: snapshot.meta.name.clone(),
            expected,
            actual: snapshot.meta.kind,
        });
    }
    Ok(())
}

fn group_by_mac(entries: &[MacEntry]) -> BTreeMap<MacAddr, Vec<&MacEntry>> {
    let mut groups: BTreeMap<MacAddr, Vec<&MacEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.mac).or_default().push(entry);
    }
    groups
}

fn to_group(mac: MacAddr, seen: &[&MacEntry]) -> EntryGroup {
    EntryGroup {
        mac,
        seen: seen.iter().map(|e| Observation::from(*e)).collect(),
    }
}

fn annotate(mac: MacAddr, pre_seen: &[&MacEntry], post_seen: &[&MacEntry]) -> RetainedEntry {
    let pre_ports: BTreeSet<&str> = pre_seen.iter().map(|e| e.port.as_str()).collect();
    let post_ports: BTreeSet<&str> = post_seen.iter().map(|e| e.port.as_str()).collect();

    let moved = (pre_ports != post_ports).then(|| PortMove {
        from: pre_ports.iter().map(|p| p.to_string()).collect(),
        to: post_ports.iter().map(|p| p.to_string()).collect(),
    });

    let pre_vlans: BTreeSet<Option<u16>> = pre_seen.iter().map(|e| e.vlan).collect();
    let post_vlans: BTreeSet<Option<u16>> = post_seen.iter().map(|e| e.vlan).collect();

    RetainedEntry {
        mac,
        pre: pre_seen.iter().map(|e| Observation::from(*e)).collect(),
        post: post_seen.iter().map(|e| Observation::from(*e)).collect(),
        moved,
        vlan_changed: pre_vlans != post_vlans,
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
