use std::fs;

use anyhow::Context;
use macdiff_common::config::Config;
use macdiff_common::{info, warn};

use crate::commands::build_service;
use crate::terminal::print;

pub fn report(cfg: &Config) -> anyhow::Result<()> {
    let svc = build_service(cfg)?;

    let Some(path) = svc.latest_report()? else {
        warn!("no reports yet; run `macdiff compare <pre> <post>` first");
        return Ok(());
    };

    info!("latest report: {}", path.display());
    if cfg.quiet >= 2 {
        return Ok(());
    }

    let body = fs::read_to_string(&path)
        .with_context(|| format!("cannot read report `{}`", path.display()))?;
    for line in body.lines() {
        print::print(line);
    }
    Ok(())
}
