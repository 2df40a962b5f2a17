//! Outbound port for hardware vendor lookup.

use crate::network::mac::MacAddr;

/// Resolves the organization behind an address's OUI prefix. Used to
/// annotate report entries; never consulted for comparison identity.
pub trait VendorRepository {
    fn vendor_of(&self, mac: &MacAddr) -> Option<String>;
}
