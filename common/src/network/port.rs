//! Switch interface name normalization.
//!
//! Capture sources spell the same port as `GigabitEthernet1/0/1`,
//! `Gi1/0/1` or `gi1/0/1` depending on platform and command. Snapshots
//! store the short canonical form so a port move is never faked by a
//! spelling difference.

/// Short interface prefixes, longest match first so `TwentyFiveGigE`
/// is not swallowed by `Te`.
const PORT_PREFIXES: [&str; 8] = ["Twe", "Two", "Eth", "Te", "Gi", "Fa", "Lo", "Vl"];

/// Prefixes that identify edge (access) interfaces. Loopbacks and VLAN
/// SVIs carry the switch's own addresses, not endpoints.
const EDGE_PREFIXES: [&str; 6] = ["Twe", "Two", "Eth", "Te", "Gi", "Fa"];

/// Collapses a long interface name to its short switch form:
/// `GigabitEthernet1/0/1` becomes `Gi1/0/1`. Names with no recognized
/// prefix or no port number pass through unchanged.
pub fn normalize_port(raw: &str) -> String {
    let raw = raw.trim();
    for prefix in PORT_PREFIXES {
        let matches_prefix = raw
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches_prefix {
            if let Some(idx) = raw.find(|c: char| c.is_ascii_digit()) {
                return format!("{prefix}{}", &raw[idx..]);
            }
        }
    }
    raw.to_string()
}

/// Whether a (normalized) port is an edge interface where endpoints live.
pub fn is_edge_port(port: &str) -> bool {
    EDGE_PREFIXES.iter().any(|prefix| {
        port.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            && port[prefix.len()..].starts_with(|c: char| c.is_ascii_digit())
    })
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

    #[test]
    fn collapses_long_interface_names() {
        assert_eq!(normalize_port("GigabitEthernet1/0/1"), "Gi1/0/1");
        assert_eq!(normalize_port("TenGigabitEthernet1/1/1"), "Te1/1/1");
        assert_eq!(normalize_port("FastEthernet0/12"), "Fa0/12");
        assert_eq!(normalize_port("TwoGigabitEthernet1/0/3"), "Two1/0/3");
        assert_eq!(normalize_port("TwentyFiveGigE1/0/48"), "Twe1/0/48");
        assert_eq!(normalize_port("Ethernet1/4"), "Eth1/4");
        assert_eq!(normalize_port("Vlan100"), "Vl100");
        assert_eq!(normalize_port("Loopback0"), "Lo0");
    }

    #[test]
    fn short_forms_and_case_are_canonicalized() {
        assert_eq!(normalize_port("Gi1/0/1"), "Gi1/0/1");
        assert_eq!(normalize_port("gi1/0/1"), "Gi1/0/1");
        assert_eq!(normalize_port("  Te1/1/1  "), "Te1/1/1");
    }

    #[test]
    fn unrecognized_names_pass_through() {
        assert_eq!(normalize_port("Port-channel1"), "Port-channel1");
        assert_eq!(normalize_port("bond0"), "bond0");
        assert_eq!(normalize_port("CPU"), "CPU");
    }

    #[test]
    fn edge_ports_exclude_switch_internals() {
        assert!(is_edge_port("Gi1/0/1"));
        assert!(is_edge_port("Twe1/0/48"));
        assert!(is_edge_port("Eth1/4"));

        assert!(!is_edge_port("Vl100"));
        assert!(!is_edge_port("Lo0"));
        assert!(!is_edge_port("Port-channel1"));
        assert!(!is_edge_port("CPU"));
    }
}
