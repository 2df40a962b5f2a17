use macdiff_common::config::Config;

use crate::terminal::print;

/// The CLI form of "open snapshot folder": print where everything is.
pub fn folder(cfg: &Config) -> anyhow::Result<()> {
    print::set_key_width(9);
    print::aligned_line("Data", cfg.data_dir.display().to_string());
    print::aligned_line("Snapshots", cfg.snapshots_dir().display().to_string());
    print::aligned_line("Reports", cfg.reports_dir().display().to_string());
    Ok(())
}
