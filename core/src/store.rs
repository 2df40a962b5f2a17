//! # Filesystem Snapshot Store
//!
//! One folder per snapshot under `<data_dir>/snapshots/`, named with
//! the bracket scheme `[Kind]_[name]_[timestamp]`. Each folder holds:
//!
//! * `entries.tsv` — the normalized observations, one
//!   `mac<TAB>port<TAB>vlan` record per line (`-` for no VLAN), sorted.
//!   The format doubles as canonical capture input, so a snapshot can
//!   be re-imported or inspected with ordinary text tools.
//! * `meta.json` — name, kind, timestamp and entry count.
//!
//! Creates are atomic: everything is written into a `.tmp-` staging
//! folder next to the final location, then published with one rename.
//! A reader can never observe a half-written snapshot, and `list()`
//! ignores staging leftovers from interrupted runs. Published snapshots
//! are immutable; creating over an existing label is refused.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use macdiff_common::error::{EntryDefect, Error, Result};
use macdiff_common::snapshot::{MacEntry, Snapshot, SnapshotKind, SnapshotMeta};
use macdiff_common::storage::SnapshotStore;
use tracing::debug;

const ENTRIES_FILE: &str = "entries.tsv";
const META_FILE: &str = "meta.json";
const STAGING_PREFIX: &str = ".tmp-";

pub struct FsSnapshotStore {
    snapshots_dir: PathBuf,
}

impl FsSnapshotStore {
    /// Opens (creating if needed) the snapshot tree under `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let snapshots_dir = data_dir.join("snapshots");
        fs::create_dir_all(&snapshots_dir)
            .map_err(|e| Error::storage("creating snapshots folder", &snapshots_dir, e))?;
        Ok(Self { snapshots_dir })
    }

    pub fn snapshots_dir(&self) -> &Path {
        &self.snapshots_dir
    }

    /// Maps `name` (bare label or full folder label) to a stored
    /// snapshot folder. Bare labels resolve to the newest capture.
    fn resolve(&self, name: &str) -> Result<(PathBuf, SnapshotMeta)> {
        if SnapshotMeta::parse_folder_label(name).is_some() {
            let path = self.snapshots_dir.join(name);
            if !path.is_dir() {
                return Err(Error::SnapshotNotFound {
                    name: name.to_string(),
                });
            }
            let meta = self.read_meta(&path)?;
            return Ok((path, meta));
        }

        let mut candidates: Vec<SnapshotMeta> = self
            .list()?
            .into_iter()
            .filter(|meta| meta.name == name)
            .collect();
        candidates.sort_by(|a, b| {
            (a.taken_at.as_str(), a.kind.label()).cmp(&(b.taken_at.as_str(), b.kind.label()))
        });

        match candidates.pop() {
            Some(meta) => {
                let path = self.snapshots_dir.join(meta.folder_label());
                Ok((path, meta))
            }
            None => Err(Error::SnapshotNotFound {
                name: name.to_string(),
            }),
        }
    }

    fn read_meta(&self, folder: &Path) -> Result<SnapshotMeta> {
        let path = folder.join(META_FILE);
        let body = fs::read_to_string(&path)
            .map_err(|e| Error::storage("reading snapshot metadata", &path, e))?;
        serde_json::from_str(&body).map_err(|e| {
            Error::storage(
                "parsing snapshot metadata",
                &path,
                io::Error::new(io::ErrorKind::InvalidData, e),
            )
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        let reason = if name.is_empty() {
            Some("must not be empty")
        } else if name.starts_with('.') {
            Some("must not start with a dot")
        } else if name.contains(['[', ']', '/', '\\']) {
            Some("must not contain brackets or path separators")
        } else if name.chars().any(char::is_control) {
            Some("must not contain control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidName {
                name: name.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn list(&self) -> Result<Vec<SnapshotMeta>> {
        let dir_entries = fs::read_dir(&self.snapshots_dir)
            .map_err(|e| Error::storage("reading snapshots folder", &self.snapshots_dir, e))?;

        let mut snapshots: Vec<SnapshotMeta> = Vec::new();
        for dir_entry in dir_entries {
            let dir_entry = dir_entry
                .map_err(|e| Error::storage("reading snapshots folder", &self.snapshots_dir, e))?;
            let folder_name = dir_entry.file_name().to_string_lossy().into_owned();
            if folder_name.starts_with(STAGING_PREFIX) {
                continue;
            }
            if SnapshotMeta::parse_folder_label(&folder_name).is_none() {
                debug!(folder = %folder_name, "ignoring non-snapshot folder");
                continue;
            }
            match self.read_meta(&dir_entry.path()) {
                Ok(meta) => snapshots.push(meta),
                Err(err) => debug!(folder = %folder_name, %err, "ignoring unreadable snapshot"),
            }
        }

        snapshots.sort_by(|a, b| {
            (a.name.as_str(), a.taken_at.as_str()).cmp(&(b.name.as_str(), b.taken_at.as_str()))
        });
        Ok(snapshots)
    }

    fn get(&self, name: &str) -> Result<Snapshot> {
        let (path, meta) = self.resolve(name)?;
        let entries_path = path.join(ENTRIES_FILE);
        let body = fs::read_to_string(&entries_path)
            .map_err(|e| Error::storage("reading snapshot entries", &entries_path, e))?;
        let entries = parse_entries(&body)?;
        Ok(Snapshot::new(meta.name, meta.kind, meta.taken_at, entries))
    }

    fn create(
        &self,
        name: &str,
        kind: SnapshotKind,
        taken_at: &str,
        entries: &[MacEntry],
    ) -> Result<SnapshotMeta> {
        Self::validate_name(name)?;

        let snapshot = Snapshot::new(name, kind, taken_at, entries.to_vec());
        let label = snapshot.meta.folder_label();
        let final_path = self.snapshots_dir.join(&label);
        if final_path.exists() {
            return Err(Error::AlreadyExists { label });
        }

        let staging = self.snapshots_dir.join(format!("{STAGING_PREFIX}{label}"));
        if staging.exists() {
            // Leftover from an interrupted run; safe to discard.
            fs::remove_dir_all(&staging)
                .map_err(|e| Error::storage("clearing stale staging folder", &staging, e))?;
        }
        fs::create_dir_all(&staging)
            .map_err(|e| Error::storage("creating staging folder", &staging, e))?;

        let entries_path = staging.join(ENTRIES_FILE);
        fs::write(&entries_path, serialize_entries(&snapshot.entries))
            .map_err(|e| Error::storage("writing snapshot entries", &entries_path, e))?;

        let meta_path = staging.join(META_FILE);
        let meta_body = serde_json::to_string_pretty(&snapshot.meta).unwrap_or_default();
        fs::write(&meta_path, meta_body)
            .map_err(|e| Error::storage("writing snapshot metadata", &meta_path, e))?;

        // The publish: one rename, so readers see all of it or none.
        fs::rename(&staging, &final_path)
            .map_err(|e| Error::storage("publishing snapshot", &final_path, e))?;

        debug!(label = %snapshot.meta.folder_label(), entries = snapshot.meta.entry_count, "snapshot created");
        Ok(snapshot.meta)
    }

    fn delete(&self, name: &str) -> Result<SnapshotMeta> {
        let (path, meta) = self.resolve(name)?;
        fs::remove_dir_all(&path).map_err(|e| Error::storage("deleting snapshot", &path, e))?;
        debug!(label = %meta.folder_label(), "snapshot deleted");
        Ok(meta)
    }
}

fn serialize_entries(entries: &[MacEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let vlan = entry
            .vlan
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("{}\t{}\t{}\n", entry.mac, entry.port, vlan));
    }
    out
}

fn parse_entries(body: &str) -> Result<Vec<MacEntry>> {
    let mut entries = Vec::new();
    for (idx, line) in body.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let mac_field = fields.next().unwrap_or_default();
        let mac = mac_field
            .parse()
            .map_err(|e: macdiff_common::network::mac::MacParseError| {
                Error::malformed(idx + 1, line, EntryDefect::Address(e))
            })?;
        let Some(port) = fields.next() else {
            return Err(Error::malformed(idx + 1, line, EntryDefect::MissingPort));
        };
        let vlan = fields
            .next()
            .filter(|v| *v != "-")
            .and_then(|v| v.parse().ok());
        entries.push(MacEntry::new(mac, port, vlan));
    }
    Ok(entries)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(mac: &str, port: &str, vlan: Option<u16>) -> MacEntry {
        MacEntry::new(mac.parse().unwrap(), port, vlan)
    }

    fn sample_entries() -> Vec<MacEntry> {
        vec![
            entry("aa:bb:cc:dd:ee:02", "Gi1/0/2", Some(100)),
            entry("aa:bb:cc:dd:ee:01", "Gi1/0/1", None),
        ]
    }

    #[test]
    fn create_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();

        let meta = store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_10.00.00", &sample_entries())
            .unwrap();
        assert_eq!(meta.entry_count, 2);

        let snapshot = store.get("office-a").unwrap();
        assert_eq!(snapshot.meta, meta);
        // Stable order: sorted by address.
        assert_eq!(snapshot.entries[0].mac.to_string(), "aa:bb:cc:dd:ee:01");
        assert_eq!(snapshot.entries[0].vlan, None);
        assert_eq!(snapshot.entries[1].vlan, Some(100));
    }

    #[test]
    fn publish_leaves_no_staging_residue() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();
        store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_10.00.00", &sample_entries())
            .unwrap();

        let leftovers = fs::read_dir(store.snapshots_dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(STAGING_PREFIX))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn snapshots_are_immutable_once_published() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();
        store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_10.00.00", &sample_entries())
            .unwrap();

        let err = store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_10.00.00", &[])
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
    }

    #[test]
    fn bare_names_resolve_to_the_newest_capture() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();
        store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_10.00.00", &sample_entries())
            .unwrap();
        store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_12.30.00", &sample_entries()[..1])
            .unwrap();

        let snapshot = store.get("office-a").unwrap();
        assert_eq!(snapshot.meta.taken_at, "2026-08-07_12.30.00");
        assert_eq!(snapshot.meta.entry_count, 1);
    }

    #[test]
    fn full_labels_pin_an_exact_capture() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();
        store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_10.00.00", &sample_entries())
            .unwrap();
        store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_12.30.00", &sample_entries())
            .unwrap();

        let pinned = store.get("[Pre]_[office-a]_[2026-08-07_10.00.00]").unwrap();
        assert_eq!(pinned.meta.taken_at, "2026-08-07_10.00.00");
    }

    #[test]
    fn missing_snapshots_are_reported_by_name() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();

        let err = store.get("nope").unwrap_err();
        assert!(matches!(err, Error::SnapshotNotFound { name } if name == "nope"));
    }

    #[test]
    fn listing_is_sorted_and_skips_staging_folders() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();
        store
            .create("zulu", SnapshotKind::Pre, "2026-08-07_10.00.00", &sample_entries())
            .unwrap();
        store
            .create("alpha", SnapshotKind::Post, "2026-08-07_11.00.00", &sample_entries())
            .unwrap();
        // Simulated interrupted create.
        fs::create_dir(store.snapshots_dir().join(".tmp-[Pre]_[ghost]_[2026-08-07_12.00.00]"))
            .unwrap();

        let listing = store.list().unwrap();
        let names: Vec<&str> = listing.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zulu"]);
    }

    #[test]
    fn delete_removes_the_folder() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();
        let meta = store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_10.00.00", &sample_entries())
            .unwrap();

        let deleted = store.delete("office-a").unwrap();
        assert_eq!(deleted, meta);
        assert!(matches!(
            store.get("office-a").unwrap_err(),
            Error::SnapshotNotFound { .. }
        ));
        assert!(matches!(
            store.delete("office-a").unwrap_err(),
            Error::SnapshotNotFound { .. }
        ));
    }

    #[test]
    fn hostile_names_are_rejected() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();

        for name in ["", "../escape", "a/b", "with[brackets]", ".hidden"] {
            let err = store
                .create(name, SnapshotKind::Pre, "2026-08-07_10.00.00", &[])
                .unwrap_err();
            assert!(matches!(err, Error::InvalidName { .. }), "name: {name:?}");
        }
    }

    #[test]
    fn stored_form_is_the_documented_tsv() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::open(dir.path()).unwrap();
        let meta = store
            .create("office-a", SnapshotKind::Pre, "2026-08-07_10.00.00", &sample_entries())
            .unwrap();

        let body = fs::read_to_string(
            store
                .snapshots_dir()
                .join(meta.folder_label())
                .join(ENTRIES_FILE),
        )
        .unwrap();
        assert_eq!(
            body,
            "aa:bb:cc:dd:ee:01\tGi1/0/1\t-\naa:bb:cc:dd:ee:02\tGi1/0/2\t100\n"
        );
    }
}
