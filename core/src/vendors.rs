//! Vendor lookup over the embedded IEEE OUI registry.

use std::sync::OnceLock;

use mac_oui::Oui;
use macdiff_common::network::mac::MacAddr;
use macdiff_common::vendors::VendorRepository;

static OUI_DB: OnceLock<Oui> = OnceLock::new();

/// Retrieves or initializes the **Organizationally Unique Identifier**
/// database used for linking a vendor to an address.
fn oui_db() -> &'static Oui {
    OUI_DB.get_or_init(|| Oui::default().expect("failed to load OUI database"))
}

/// Resolves vendors from the `mac_oui` embedded database. The database
/// loads once, on first lookup.
pub struct OuiVendorRepo;

impl VendorRepository for OuiVendorRepo {
    fn vendor_of(&self, mac: &MacAddr) -> Option<String> {
        let db = oui_db();
        let mac_str = mac.to_string();
        match db.lookup_by_mac(&mac_str) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}

/// Null lookup for tests and `--no-vendors` runs.
pub struct NoVendors;

impl VendorRepository for NoVendors {
    fn vendor_of(&self, _mac: &MacAddr) -> Option<String> {
        None
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
