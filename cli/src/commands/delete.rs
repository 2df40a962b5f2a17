use macdiff_common::config::Config;
use macdiff_common::{success, warn};

use crate::commands::build_service;

pub fn delete(cfg: &Config, names: &[String]) -> anyhow::Result<()> {
    let svc = build_service(cfg)?;

    let mut failed: usize = 0;
    for name in names {
        match svc.delete(name) {
            Ok(meta) => success!("deleted {}", meta.folder_label()),
            Err(err) => {
                failed += 1;
                warn!("{err}");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} deletion(s) failed", names.len());
    }
    Ok(())
}
