use std::path::PathBuf;

/// Runtime configuration assembled by the management shell and passed
/// down explicitly; the core crates keep no ambient state.
pub struct Config {
    /// Root folder owning the snapshot and report trees.
    pub data_dir: PathBuf,
    /// Output reduction: 0 full, 1 condensed, 2 summary only.
    pub quiet: u8,
    /// Skip OUI vendor enrichment in views and reports.
    pub no_vendors: bool,
}

impl Config {
    /// Where the store keeps one folder per snapshot.
    pub fn snapshots_dir(&self) -> PathBuf {
        self.data_dir.join("snapshots")
    }

    /// Where comparison reports are written.
    pub fn reports_dir(&self) -> PathBuf {
        self.data_dir.join("reports")
    }
}
