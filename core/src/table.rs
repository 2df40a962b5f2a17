//! # MAC Table Loader
//!
//! Reduces heterogeneous capture text to canonical [`MacEntry`] records.
//! Input arrives as one observation per line in either of two shapes:
//!
//! * `mac port [vlan]` — the canonical record order, which is also the
//!   snapshot serialization itself, so stored snapshots round-trip
//!   through this loader;
//! * `vlan mac [type] port` — the order switch CLIs print their MAC
//!   address table in, recognized so a raw table dump imports directly.
//!
//! The load is best-effort: blank lines, comments, rulers and column
//! headers are skipped as noise, while lines that carry an
//! address-shaped field that fails validation are collected as
//! [`Error::MalformedEntry`] rejects without aborting the rest.

use macdiff_common::error::{EntryDefect, Error};
use macdiff_common::network::mac::MacAddr;
use macdiff_common::network::port::{is_edge_port, normalize_port};
use macdiff_common::snapshot::MacEntry;
use tracing::debug;

/// Result of one best-effort load.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub entries: Vec<MacEntry>,
    pub rejects: Vec<Error>,
}

impl LoadOutcome {
    pub fn is_clean(&self) -> bool {
        self.rejects.is_empty()
    }
}

/// Loads every record in `text`, skipping noise and collecting
/// malformed records per line.
pub fn load_entries(text: &str) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for (idx, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some(Ok(entry)) => outcome.entries.push(entry),
            Some(Err(defect)) => {
                outcome
                    .rejects
                    .push(Error::malformed(idx + 1, line.trim(), defect));
            }
            None => {}
        }
    }

    debug!(
        entries = outcome.entries.len(),
        rejects = outcome.rejects.len(),
        "capture load finished"
    );
    outcome
}

/// Drops observations on non-edge interfaces (uplinks, SVIs, the CPU
/// port) so a snapshot holds endpoints only. Returns how many were
/// dropped.
pub fn retain_edge_ports(entries: &mut Vec<MacEntry>) -> usize {
    let before = entries.len();
    entries.retain(|entry| is_edge_port(&entry.port));
    before - entries.len()
}

/// `None` for noise, otherwise the parsed record or its defect.
fn parse_line(line: &str) -> Option<Result<MacEntry, EntryDefect>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if line.chars().all(|c| matches!(c, '-' | '=' | ' ' | '\t')) {
        return None;
    }

    let tokens: Vec<&str> = line
        .split([',', ' ', '\t'])
        .map(str::trim)
        .filter(|t| !t.is_empty() && *t != "*")
        .collect();

    // Header lines ("Vlan  Mac Address  Type  Ports") carry nothing
    // address-shaped; they are layout, not data.
    if !tokens.iter().any(|t| MacAddr::looks_like(t)) {
        debug!(line, "skipping non-record line");
        return None;
    }

    let (mac_token, port_token, vlan) = match switch_table_shape(&tokens) {
        Some(shape) => shape,
        None => (
            tokens[0],
            tokens.get(1).copied(),
            tokens.get(2).and_then(|t| parse_vlan(t)),
        ),
    };

    let mac: MacAddr = match mac_token.parse() {
        Ok(mac) => mac,
        Err(err) => return Some(Err(EntryDefect::Address(err))),
    };
    let Some(port_token) = port_token else {
        return Some(Err(EntryDefect::MissingPort));
    };

    Some(Ok(MacEntry::new(mac, normalize_port(port_token), vlan)))
}

/// Recognizes the `vlan mac [type] port` order a switch CLI prints.
fn switch_table_shape<'a>(tokens: &[&'a str]) -> Option<(&'a str, Option<&'a str>, Option<u16>)> {
    if tokens.len() < 3 {
        return None;
    }
    let vlan = parse_vlan(tokens[0])?;
    if !MacAddr::looks_like(tokens[1]) {
        return None;
    }
    Some((tokens[1], tokens.last().copied(), Some(vlan)))
}

fn parse_vlan(token: &str) -> Option<u16> {
    token
        .parse::<u16>()
        .ok()
        .filter(|vlan| (1..=4094).contains(vlan))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
