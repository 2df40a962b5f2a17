use colored::*;
use macdiff_common::config::Config;
use macdiff_common::success;
use macdiff_common::vendors::VendorRepository;
use macdiff_core::compare::ComparisonResult;

use crate::commands::build_service;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn compare(cfg: &Config, pre: &str, post: &str) -> anyhow::Result<()> {
    print::header("comparing snapshots", cfg.quiet);

    let svc = build_service(cfg)?;
    let (result, paths) = svc.compare(pre, post)?;

    print::set_key_width(8);
    print::aligned_line("Pre", result.pre.folder_label());
    print::aligned_line("Post", result.post.folder_label());
    print_counts(&result);

    if cfg.quiet == 0 {
        print_missing(&result, &svc);
        print_added(&result);
        print_moved(&result);
    }

    print_verdict(&result, cfg);
    success!("report written to {}", paths.text.display());
    Ok(())
}

fn print_counts(result: &ComparisonResult) {
    let retained: ColoredString = result.retained.len().to_string().color(colors::GOOD);
    print::aligned_line("Retained", retained);

    let moved: usize = result.moved_count();
    if moved > 0 {
        print::aligned_line("Moved", moved.to_string().color(colors::NOTICE));
    }

    let missing: ColoredString = if result.missing.is_empty() {
        "0".color(colors::GOOD)
    } else {
        result.missing.len().to_string().color(colors::BAD).bold()
    };
    print::aligned_line("Missing", missing);

    let added: ColoredString = if result.added.is_empty() {
        "0".color(colors::TEXT_DEFAULT)
    } else {
        result.added.len().to_string().color(colors::NOTICE)
    };
    print::aligned_line("Added", added);
}

/// The actionable section: every endpoint that did not survive, as a
/// small tree with everything known about where it used to live.
fn print_missing(result: &ComparisonResult, svc: &macdiff_core::service::ValidationService) {
    if result.missing.is_empty() {
        return;
    }

    print::header("missing endpoints", 0);
    for (idx, group) in result.missing.iter().enumerate() {
        print::tree_head(idx, &group.mac.to_string());

        let ports: Vec<&str> = group.seen.iter().map(|o| o.port.as_str()).collect();
        let mut details: Vec<Detail> = vec![(
            "Port".to_string(),
            ports.join(",").color(colors::TEXT_DEFAULT),
        )];

        let vlans: Vec<String> = group
            .seen
            .iter()
            .filter_map(|o| o.vlan)
            .map(|v| v.to_string())
            .collect();
        if !vlans.is_empty() {
            details.push(("Vlan".to_string(), vlans.join(",").normal()));
        }

        if let Some(vendor) = svc.vendors().vendor_of(&group.mac) {
            details.push(("Vendor".to_string(), vendor.normal()));
        }

        print::as_tree_one_level(details);
    }
}

fn print_added(result: &ComparisonResult) {
    if result.added.is_empty() {
        return;
    }

    print::header("new endpoints", 0);
    for group in &result.added {
        let ports: Vec<&str> = group.seen.iter().map(|o| o.port.as_str()).collect();
        let line: String = format!(
            "  {}  {}",
            group.mac.to_string().color(colors::MAC_ADDR),
            ports.join(",")
        );
        print::print(&line);
    }
}

fn print_moved(result: &ComparisonResult) {
    let moved: Vec<_> = result
        .retained
        .iter()
        .filter(|entry| entry.moved.is_some())
        .collect();
    if moved.is_empty() {
        return;
    }

    print::header("moved endpoints", 0);
    for entry in moved {
        let Some(note) = entry.moved.as_ref() else {
            continue;
        };
        let retag: &str = if entry.vlan_changed { "  [vlan changed]" } else { "" };
        let line: String = format!(
            "  {}  {}{}",
            entry.mac.to_string().color(colors::MAC_ADDR),
            note.describe().color(colors::NOTICE),
            retag
        );
        print::print(&line);
    }
}

fn print_verdict(result: &ComparisonResult, cfg: &Config) {
    let verdict: ColoredString = if result.is_clean() {
        "Validation clean: every Pre endpoint answered after the cutover"
            .green()
            .bold()
    } else {
        format!(
            "Validation needs attention: {} endpoint(s) missing after the cutover",
            result.missing.len()
        )
        .red()
        .bold()
    };

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&format!("{}", verdict));
        }
        _ => print::print(&format!("{}", verdict)),
    }
}
