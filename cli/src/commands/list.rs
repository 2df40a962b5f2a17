use colored::*;
use macdiff_common::config::Config;
use macdiff_common::info;
use macdiff_common::snapshot::SnapshotKind;

use crate::commands::build_service;
use crate::terminal::{colors, print};

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    print::header("stored snapshots", cfg.quiet);

    let svc = build_service(cfg)?;
    let snapshots = svc.list()?;

    if snapshots.is_empty() {
        print::centerln("no snapshots yet");
        info!("capture one with `macdiff import <file> --name <label> --kind pre`");
        return Ok(());
    }

    let name_width: usize = snapshots
        .iter()
        .map(|meta| meta.name.len())
        .max()
        .unwrap_or(0)
        .max("name".len());

    let heading: String = format!(
        "{:<name_width$}  {:<4}  {:<19}  {:>7}",
        "name", "kind", "captured", "entries"
    );
    print::print(&format!("{}", heading.bright_black()));

    for meta in &snapshots {
        let name: ColoredString =
            format!("{:<name_width$}", meta.name).color(colors::PRIMARY);
        let kind: ColoredString = match meta.kind {
            SnapshotKind::Pre => format!("{:<4}", meta.kind.label()).color(colors::GOOD),
            SnapshotKind::Post => format!("{:<4}", meta.kind.label()).color(colors::NOTICE),
        };
        let line: String = format!(
            "{}  {}  {:<19}  {:>7}",
            name, kind, meta.taken_at, meta.entry_count
        );
        print::print(&line);
    }

    Ok(())
}
