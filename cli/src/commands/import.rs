use std::fs;
use std::path::Path;

use anyhow::Context;
use macdiff_common::config::Config;
use macdiff_common::snapshot::SnapshotKind;
use macdiff_common::{info, success, warn};

use crate::commands::build_service;
use crate::terminal::print;

pub fn import(
    cfg: &Config,
    file: &Path,
    name: &str,
    kind: SnapshotKind,
    edge_only: bool,
) -> anyhow::Result<()> {
    print::header("capturing snapshot", cfg.quiet);

    let text = fs::read_to_string(file)
        .with_context(|| format!("cannot read capture file `{}`", file.display()))?;

    let svc = build_service(cfg)?;
    let summary = svc.import(name, kind, &text, edge_only)?;

    for reject in &summary.rejects {
        warn!("skipped {reject}");
    }
    if summary.dropped_non_edge > 0 {
        info!(
            "dropped {} observation(s) on non-edge ports",
            summary.dropped_non_edge
        );
    }

    success!(
        "snapshot {} created with {} entries ({} records rejected)",
        summary.meta.folder_label(),
        summary.meta.entry_count,
        summary.rejects.len()
    );
    Ok(())
}
