use colored::*;
use macdiff_common::config::Config;
use macdiff_common::vendors::VendorRepository;

use crate::commands::build_service;
use crate::terminal::{colors, print};

pub fn view(cfg: &Config, name: &str) -> anyhow::Result<()> {
    let svc = build_service(cfg)?;
    let snapshot = svc.get(name)?;

    print::header("snapshot", cfg.quiet);
    print::set_key_width(8);
    print::aligned_line("Name", snapshot.meta.name.as_str());
    print::aligned_line("Kind", snapshot.meta.kind.label().color(colors::ACCENT));
    print::aligned_line("Captured", snapshot.meta.taken_at.as_str());
    print::aligned_line("Entries", snapshot.meta.entry_count.to_string());

    if cfg.quiet >= 2 {
        return Ok(());
    }

    for entry in &snapshot.entries {
        let mac: ColoredString = entry.mac.to_string().color(colors::MAC_ADDR);
        let vlan: String = entry
            .vlan
            .map(|v| format!("vlan {v}"))
            .unwrap_or_else(|| "-".to_string());
        let vendor: String = svc.vendors().vendor_of(&entry.mac).unwrap_or_default();
        let line: String = format!(
            "  {}  {:<14}  {:<10}  {}",
            mac, entry.port, vlan, vendor
        );
        print::print(line.trim_end());
    }

    Ok(())
}
