//! # Validation Service
//!
//! The one façade the management shell talks to. Orchestrates the
//! snapshot store, the capture loader, the comparator and the report
//! builder behind the plain callable contract the tool exposes:
//! list, get, delete, import, compare, latest report.
//!
//! The service owns its collaborators through their `macdiff-common`
//! ports, so the shell never touches the filesystem layout and tests
//! can substitute stores or vendor sources freely.

use std::path::{Path, PathBuf};

use macdiff_common::error::{Error, Result};
use macdiff_common::snapshot::{Snapshot, SnapshotKind, SnapshotMeta};
use macdiff_common::storage::SnapshotStore;
use macdiff_common::vendors::VendorRepository;
use tracing::debug;

use crate::compare::{self, ComparisonResult};
use crate::report::{self, ReportPaths};
use crate::stamp;
use crate::table::{self, LoadOutcome};

/// What one capture import produced.
#[derive(Debug)]
pub struct ImportSummary {
    pub meta: SnapshotMeta,
    /// Per-record defects; the snapshot was still created from the
    /// valid remainder.
    pub rejects: Vec<Error>,
    /// Observations dropped by the edge-ports filter, if enabled.
    pub dropped_non_edge: usize,
}

pub struct ValidationService {
    store: Box<dyn SnapshotStore>,
    vendors: Box<dyn VendorRepository>,
    reports_dir: PathBuf,
}

impl ValidationService {
    pub fn new(
        store: Box<dyn SnapshotStore>,
        vendors: Box<dyn VendorRepository>,
        reports_dir: PathBuf,
    ) -> Self {
        Self {
            store,
            vendors,
            reports_dir,
        }
    }

    pub fn list(&self) -> Result<Vec<SnapshotMeta>> {
        self.store.list()
    }

    pub fn get(&self, name: &str) -> Result<Snapshot> {
        self.store.get(name)
    }

    pub fn delete(&self, name: &str) -> Result<SnapshotMeta> {
        self.store.delete(name)
    }

    /// Captures a snapshot from raw table text: normalize, optionally
    /// keep edge ports only, persist. Malformed records are collected,
    /// never fatal.
    pub fn import(
        &self,
        name: &str,
        kind: SnapshotKind,
        text: &str,
        edge_only: bool,
    ) -> Result<ImportSummary> {
        let LoadOutcome {
            mut entries,
            rejects,
        } = table::load_entries(text);

        let dropped_non_edge = if edge_only {
            table::retain_edge_ports(&mut entries)
        } else {
            0
        };

        let meta = self.store.create(name, kind, &stamp::now(), &entries)?;
        debug!(
            label = %meta.folder_label(),
            rejects = rejects.len(),
            dropped_non_edge,
            "capture imported"
        );

        Ok(ImportSummary {
            meta,
            rejects,
            dropped_non_edge,
        })
    }

    /// Loads both snapshots, diffs them, and writes the report
    /// artifacts. The comparator enforces the Pre/Post preconditions
    /// before any computation.
    pub fn compare(
        &self,
        pre_name: &str,
        post_name: &str,
    ) -> Result<(ComparisonResult, ReportPaths)> {
        let pre = self.store.get(pre_name)?;
        let post = self.store.get(post_name)?;

        let result = compare::compare(&pre, &post)?;
        let paths = report::write_report(
            &result,
            self.vendors.as_ref(),
            &self.reports_dir,
            &stamp::now(),
        )?;

        Ok((result, paths))
    }

    /// The most recently written report artifact, if any.
    pub fn latest_report(&self) -> Result<Option<PathBuf>> {
        report::latest_report(&self.reports_dir)
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    pub fn vendors(&self) -> &dyn VendorRepository {
        self.vendors.as_ref()
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
