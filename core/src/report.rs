//! # Report Builder
//!
//! Renders a [`ComparisonResult`] into the validation artifacts: a
//! human-readable text report and a JSON document for tooling. Both are
//! pure functions of the result — rendering the same comparison twice
//! yields byte-identical artifacts, so "view latest report" never has
//! to recompute anything (though recomputing is always safe, the
//! comparator being pure).
//!
//! Missing entries are the actionable failures and every one of them is
//! listed individually; added and moved entries follow for completeness.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use macdiff_common::error::{Error, Result};
use macdiff_common::network::mac::MacAddr;
use macdiff_common::vendors::VendorRepository;
use serde::Serialize;

use crate::compare::{ComparisonResult, EntryGroup, Observation, RetainedEntry};

const RULE_WIDTH: usize = 64;

/// Where one comparison's artifacts landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub json: PathBuf,
}

#[derive(Serialize)]
struct Summary {
    retained: usize,
    moved: usize,
    missing: usize,
    added: usize,
    clean: bool,
}

#[derive(Serialize)]
struct AnnotatedGroup<'a> {
    mac: MacAddr,
    seen: &'a [Observation],
    vendor: Option<String>,
}

#[derive(Serialize)]
struct MovedLine<'a> {
    mac: MacAddr,
    from: &'a [String],
    to: &'a [String],
    vlan_changed: bool,
    vendor: Option<String>,
}

#[derive(Serialize)]
struct ReportDoc<'a> {
    pre: &'a macdiff_common::snapshot::SnapshotMeta,
    post: &'a macdiff_common::snapshot::SnapshotMeta,
    summary: Summary,
    missing: Vec<AnnotatedGroup<'a>>,
    added: Vec<AnnotatedGroup<'a>>,
    moved: Vec<MovedLine<'a>>,
}

/// Renders the plain-text artifact.
pub fn render_text(result: &ComparisonResult, vendors: &dyn VendorRepository) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{rule}");
    let title = format!("{:^width$}", "MAC COMPARE VALIDATION", width = RULE_WIDTH);
    let _ = writeln!(out, "{}", title.trim_end());
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "Pre  : {}  ({} entries)",
        result.pre.folder_label(),
        result.pre.entry_count
    );
    let _ = writeln!(
        out,
        "Post : {}  ({} entries)",
        result.post.folder_label(),
        result.post.entry_count
    );
    out.push('\n');

    let moved = result.moved_count();
    let _ = writeln!(out, "Summary");
    let _ = writeln!(
        out,
        "  retained : {}{}",
        result.retained.len(),
        if moved > 0 {
            format!("  ({moved} moved)")
        } else {
            String::new()
        }
    );
    let _ = writeln!(out, "  missing  : {}", result.missing.len());
    let _ = writeln!(out, "  added    : {}", result.added.len());
    let _ = writeln!(out, "  verdict  : {}", verdict(result));
    out.push('\n');

    section(&mut out, "Missing - present before the cutover, gone after");
    group_lines(&mut out, &result.missing, vendors);
    out.push('\n');

    section(&mut out, "Added - first seen after the cutover");
    group_lines(&mut out, &result.added, vendors);
    out.push('\n');

    section(&mut out, "Moved - retained on a different port");
    moved_lines(&mut out, &result.retained, vendors);

    out
}

/// Renders the JSON artifact.
pub fn render_json(result: &ComparisonResult, vendors: &dyn VendorRepository) -> String {
    let doc = ReportDoc {
        pre: &result.pre,
        post: &result.post,
        summary: Summary {
            retained: result.retained.len(),
            moved: result.moved_count(),
            missing: result.missing.len(),
            added: result.added.len(),
            clean: result.is_clean(),
        },
        missing: annotate_groups(&result.missing, vendors),
        added: annotate_groups(&result.added, vendors),
        moved: result
            .retained
            .iter()
            .filter_map(|entry| {
                entry.moved.as_ref().map(|m| MovedLine {
                    mac: entry.mac,
                    from: &m.from,
                    to: &m.to,
                    vlan_changed: entry.vlan_changed,
                    vendor: vendors.vendor_of(&entry.mac),
                })
            })
            .collect(),
    };
    // ReportDoc serialization cannot fail: no maps with non-string keys.
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

/// Writes both artifacts into `reports_dir` and returns their paths.
pub fn write_report(
    result: &ComparisonResult,
    vendors: &dyn VendorRepository,
    reports_dir: &Path,
    stamp: &str,
) -> Result<ReportPaths> {
    fs::create_dir_all(reports_dir)
        .map_err(|e| Error::storage("creating reports folder", reports_dir, e))?;

    let base = format!("{}_vs_{}_{}", result.pre.name, result.post.name, stamp);
    let paths = ReportPaths {
        text: reports_dir.join(format!("{base}.txt")),
        json: reports_dir.join(format!("{base}.json")),
    };

    fs::write(&paths.text, render_text(result, vendors))
        .map_err(|e| Error::storage("writing report", &paths.text, e))?;
    fs::write(&paths.json, render_json(result, vendors))
        .map_err(|e| Error::storage("writing report", &paths.json, e))?;

    Ok(paths)
}

/// The most recently written text report, if any.
pub fn latest_report(reports_dir: &Path) -> Result<Option<PathBuf>> {
    if !reports_dir.exists() {
        return Ok(None);
    }
    let entries = fs::read_dir(reports_dir)
        .map_err(|e| Error::storage("reading reports folder", reports_dir, e))?;

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|e| Error::storage("reading reports folder", reports_dir, e))?;
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| Error::storage("reading report metadata", &path, e))?;
        // Same-second writes tie-break on the stamped file name.
        let beats = newest.as_ref().is_none_or(|(when, existing)| {
            match modified.cmp(when) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Equal => path > *existing,
                std::cmp::Ordering::Less => false,
            }
        });
        if beats {
            newest = Some((modified, path));
        }
    }
    Ok(newest.map(|(_, path)| path))
}

fn verdict(result: &ComparisonResult) -> &'static str {
    if result.is_clean() {
        "CLEAN - every Pre endpoint answered after the cutover"
    } else {
        "ATTENTION - endpoints did not survive the cutover"
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
}

fn group_lines(out: &mut String, groups: &[EntryGroup], vendors: &dyn VendorRepository) {
    if groups.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }
    for group in groups {
        let ports: Vec<&str> = group.seen.iter().map(|o| o.port.as_str()).collect();
        let vlans = describe_vlans(&group.seen);
        let vendor = vendors.vendor_of(&group.mac).unwrap_or_default();
        let line = format!(
            "  {}  {:<14}  {:<10}  {}",
            group.mac,
            ports.join(","),
            vlans,
            vendor
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn moved_lines(out: &mut String, retained: &[RetainedEntry], vendors: &dyn VendorRepository) {
    let moved: Vec<&RetainedEntry> = retained.iter().filter(|r| r.moved.is_some()).collect();
    if moved.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }
    for entry in moved {
        // Filter above guarantees the note is present.
        let Some(note) = entry.moved.as_ref() else {
            continue;
        };
        let vendor = vendors.vendor_of(&entry.mac).unwrap_or_default();
        let retag = if entry.vlan_changed { "  [vlan changed]" } else { "" };
        let line = format!("  {}  {}{}  {}", entry.mac, note.describe(), retag, vendor);
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn annotate_groups<'a>(
    groups: &'a [EntryGroup],
    vendors: &dyn VendorRepository,
) -> Vec<AnnotatedGroup<'a>> {
    groups
        .iter()
        .map(|group| AnnotatedGroup {
            mac: group.mac,
            seen: &group.seen,
            vendor: vendors.vendor_of(&group.mac),
        })
        .collect()
}

fn describe_vlans(seen: &[Observation]) -> String {
    let mut vlans: Vec<u16> = seen.iter().filter_map(|o| o.vlan).collect();
    vlans.sort_unstable();
    vlans.dedup();
    if vlans.is_empty() {
        "-".to_string()
    } else {
        format!(
            "vlan {}",
            vlans
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        )
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use macdiff_common::snapshot::{MacEntry, Snapshot, SnapshotKind};

    /// Deterministic vendor stub keyed on the documentation OUI used in
    /// the fixtures.
    struct FakeVendors;

    impl VendorRepository for FakeVendors {
        fn vendor_of(&self, mac: &MacAddr) -> Option<String> {
            (mac.oui() == "AABBCC").then(|| "Acme Devices".to_string())
        }
    }

    struct NoVendors;

    impl VendorRepository for NoVendors {
        fn vendor_of(&self, _mac: &MacAddr) -> Option<String> {
            None
        }
    }

    fn entry(mac: &str, port: &str, vlan: Option<u16>) -> MacEntry {
        MacEntry::new(mac.parse().unwrap(), port, vlan)
    }

    fn fixture_result() -> ComparisonResult {
        let pre = Snapshot::new(
            "office-a",
            SnapshotKind::Pre,
            "2026-08-07_10.00.00",
            vec![
                entry("aa:bb:cc:dd:ee:01", "Gi1/0/1", Some(100)),
                entry("aa:bb:cc:dd:ee:02", "Gi1/0/2", Some(100)),
                entry("aa:bb:cc:dd:ee:03", "Gi1/0/3", Some(200)),
            ],
        );
        let post = Snapshot::new(
            "office-a",
            SnapshotKind::Post,
            "2026-08-07_16.00.00",
            vec![
                entry("aa:bb:cc:dd:ee:01", "Gi1/0/1", Some(100)),
                entry("aa:bb:cc:dd:ee:03", "Gi1/0/5", Some(200)),
                entry("aa:bb:cc:dd:ee:04", "Gi1/0/9", Some(100)),
            ],
        );
        compare(&pre, &post).unwrap()
    }

    #[test]
    fn rendering_is_deterministic() {
        let result = fixture_result();
        assert_eq!(
            render_text(&result, &FakeVendors),
            render_text(&result, &FakeVendors)
        );
        assert_eq!(
            render_json(&result, &FakeVendors),
            render_json(&result, &FakeVendors)
        );
    }

    #[test]
    fn summary_counts_lead_the_report() {
        let text = render_text(&fixture_result(), &NoVendors);

        assert!(text.contains("retained : 2  (1 moved)"));
        assert!(text.contains("missing  : 1"));
        assert!(text.contains("added    : 1"));
        assert!(text.contains("ATTENTION"));
    }

    #[test]
    fn every_missing_entry_is_listed() {
        let text = render_text(&fixture_result(), &FakeVendors);

        assert!(text.contains("aa:bb:cc:dd:ee:02"));
        assert!(text.contains("Acme Devices"));
    }

    #[test]
    fn moves_are_rendered_as_transitions() {
        let text = render_text(&fixture_result(), &NoVendors);
        assert!(text.contains("aa:bb:cc:dd:ee:03  Gi1/0/3 -> Gi1/0/5"));
    }

    #[test]
    fn clean_results_say_so() {
        let pre = Snapshot::new(
            "lab",
            SnapshotKind::Pre,
            "2026-08-07_10.00.00",
            vec![entry("aa:bb:cc:dd:ee:01", "Gi1/0/1", None)],
        );
        let post = Snapshot::new(
            "lab",
            SnapshotKind::Post,
            "2026-08-07_11.00.00",
            vec![entry("aa:bb:cc:dd:ee:01", "Gi1/0/1", None)],
        );
        let result = compare(&pre, &post).unwrap();
        let text = render_text(&result, &NoVendors);

        assert!(text.contains("CLEAN"));
        assert!(text.contains("Missing - present before the cutover, gone after\n  (none)"));
    }

    #[test]
    fn artifacts_land_in_the_reports_folder() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = fixture_result();

        let paths =
            write_report(&result, &NoVendors, dir.path(), "2026-08-07_16.05.00").unwrap();

        assert!(paths.text.ends_with("office-a_vs_office-a_2026-08-07_16.05.00.txt"));
        let body = fs::read_to_string(&paths.text).unwrap();
        assert_eq!(body, render_text(&result, &NoVendors));

        let json_body = fs::read_to_string(&paths.json).unwrap();
        assert!(json_body.contains("\"clean\": false"));
    }

    #[test]
    fn latest_report_finds_the_newest_artifact() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(latest_report(dir.path()).unwrap().is_none());

        let result = fixture_result();
        write_report(&result, &NoVendors, dir.path(), "2026-08-07_16.05.00").unwrap();
        let second =
            write_report(&result, &NoVendors, dir.path(), "2026-08-07_17.00.00").unwrap();

        let latest = latest_report(dir.path()).unwrap().unwrap();
        assert_eq!(latest, second.text);
    }
}
