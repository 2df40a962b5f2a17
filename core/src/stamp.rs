//! Capture timestamps.
//!
//! One textual form everywhere: `YYYY-MM-DD_HH.MM.SS`, chosen so that
//! lexical order equals chronological order (snapshot folders and
//! "newest" selection sort by plain string comparison).

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

const STAMP: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour].[minute].[second]");

/// The current UTC time in stamp form.
pub fn now() -> String {
    OffsetDateTime::now_utc()
        .format(&STAMP)
        .unwrap_or_else(|_| String::from("0000-00-00_00.00.00"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
