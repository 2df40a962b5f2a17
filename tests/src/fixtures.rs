//! Capture fixtures shared by the integration tests: a realistic
//! switch table dump from before a cutover, and the table of the
//! replacement switch afterwards.
//!
//! The pair encodes one of everything a validation can find:
//! `…ee:01` stays put, `…ee:03` moves ports, `…ee:02` disappears,
//! `…ee:09` is new, and the pre dump carries one mangled record.

/// `show mac address-table` output from the switch being replaced.
pub const PRE_DUMP: &str = "\
          Mac Address Table
-------------------------------------------

Vlan    Mac Address       Type        Ports
----    -----------       --------    -----
 100    aabb.ccdd.ee01    DYNAMIC     Gi1/0/1
 100    aabb.ccdd.ee02    DYNAMIC     Gi1/0/2
 200    aabb.ccdd.ee03    DYNAMIC     Gi1/0/3
 200    aabb.ccdd.eexx    DYNAMIC     Gi1/0/4
Total Mac Addresses for this criterion: 4
";

/// Canonical records exported from the replacement switch.
pub const POST_DUMP: &str = "\
# exported after cutover
aa:bb:cc:dd:ee:01 Gi1/0/1 100
aa:bb:cc:dd:ee:03 Gi1/0/7 200
aa:bb:cc:dd:ee:09 Gi1/0/9 100
";

/// The address the pre dump loses in the cutover.
pub const MISSING_MAC: &str = "aa:bb:cc:dd:ee:02";

/// The address that survives on a different port.
pub const MOVED_MAC: &str = "aa:bb:cc:dd:ee:03";
