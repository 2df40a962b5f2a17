//! Operator-facing output macros.
//!
//! Library code emits plain `tracing` events. These wrappers tag events
//! meant for the person driving the tool, so the terminal formatter can
//! render them with status symbols instead of log plumbing.

/// Informational status line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        tracing::info!(target: "macdiff::user", $($arg)*)
    };
}

/// A completed step worth celebrating.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "macdiff::success", $($arg)*)
    };
}

/// Something the operator should look at, without aborting the run.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "macdiff::user", $($arg)*)
    };
}
