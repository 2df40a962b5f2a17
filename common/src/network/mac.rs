//! # Canonical MAC Addresses
//!
//! Capture sources disagree on how to spell a hardware address: switch
//! CLIs emit `aabb.ccdd.ee01`, exports emit `AA-BB-CC-DD-EE-01`, most
//! everything else uses colons. This module owns the one canonical form
//! the rest of the workspace compares and sorts by: lowercase,
//! colon-separated octets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters accepted between hex digits when normalizing input.
const SEPARATORS: [char; 3] = [':', '-', '.'];

/// Why an address field failed normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacParseError {
    #[error("`{input}` contains `{found}`, expected hex digits or separators")]
    InvalidCharacter { input: String, found: char },
    #[error("`{input}` holds {digits} hex digits, expected 12")]
    WrongDigitCount { input: String, digits: usize },
}

/// A 48-bit hardware address in canonical form.
///
/// Ordering and hashing go over the raw octets, so sorting a batch of
/// addresses yields the same sequence on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// The first three octets as bare uppercase hex, the form OUI
    /// registries key their vendor tables on.
    pub fn oui(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }

    /// Cheap shape test used by line loaders to tell an address *attempt*
    /// from surrounding noise (headers, rulers, port names).
    ///
    /// A token is address-shaped when it carries at least two separator
    /// characters (every supported spelling has two or more) or is a bare
    /// run of twelve hex digits. Shape does not imply validity:
    /// `aa:bb:cc:dd:ee` and `not-a-mac` are address-shaped but fail
    /// [`MacAddr::from_str`] — loaders report those instead of skipping
    /// them.
    pub fn looks_like(token: &str) -> bool {
        let separators = token.chars().filter(|c| SEPARATORS.contains(c)).count();
        if separators >= 2 {
            return true;
        }
        token.len() == 12 && token.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl FromStr for MacAddr {
    type Err = MacParseError;

    /// Parses any common textual spelling: `aa:bb:cc:dd:ee:01`,
    /// `AA-BB-CC-DD-EE-01`, `aabb.ccdd.ee01`, `aabbccddee01`, in any
    /// case, with surrounding whitespace tolerated. Anything that does
    /// not reduce to exactly twelve hex digits is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut digits = String::with_capacity(12);

        for ch in trimmed.chars() {
            if ch.is_ascii_hexdigit() {
                digits.push(ch.to_ascii_lowercase());
            } else if !SEPARATORS.contains(&ch) {
                return Err(MacParseError::InvalidCharacter {
                    input: trimmed.to_string(),
                    found: ch,
                });
            }
        }

        if digits.len() != 12 {
            return Err(MacParseError::WrongDigitCount {
                input: trimmed.to_string(),
                digits: digits.len(),
            });
        }

        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            // Infallible: `digits` holds exactly twelve ASCII hex digits.
            *octet = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).unwrap_or_default();
        }

        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl TryFrom<String> for MacAddr {
    type Error = MacParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MacAddr> for String {
    fn from(mac: MacAddr) -> Self {
        mac.to_string()
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
