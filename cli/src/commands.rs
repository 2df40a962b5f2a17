pub mod compare;
pub mod delete;
pub mod folder;
pub mod import;
pub mod list;
pub mod report;
pub mod view;

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use macdiff_common::config::Config;
use macdiff_common::snapshot::SnapshotKind;
use macdiff_common::vendors::VendorRepository;
use macdiff_core::service::ValidationService;
use macdiff_core::store::FsSnapshotStore;
use macdiff_core::vendors::{NoVendors, OuiVendorRepo};

#[derive(Parser)]
#[command(name = "macdiff")]
#[command(about = "Validate switch cutovers by diffing MAC address table snapshots.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Folder owning the snapshot and report trees (default
    /// ./macdiff-data, or $MACDIFF_DATA)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Reduce output; repeat for summary only
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip OUI vendor enrichment in views and reports
    #[arg(long, global = true)]
    pub no_vendors: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Capture a snapshot from a MAC table dump
    #[command(alias = "i")]
    Import {
        /// Table dump: `mac port [vlan]` records or raw switch output
        file: PathBuf,
        /// Label for the snapshot (e.g. the site being migrated)
        #[arg(long)]
        name: String,
        /// Which side of the cutover this capture belongs to
        #[arg(long)]
        kind: SnapshotKind,
        /// Keep observations on edge ports only
        #[arg(long)]
        edge_only: bool,
    },
    /// List stored snapshots
    #[command(alias = "ls")]
    List,
    /// Print one snapshot's entries
    #[command(alias = "v")]
    View { name: String },
    /// Delete snapshots
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Diff a Pre snapshot against a Post snapshot and write the report
    #[command(alias = "c")]
    Compare { pre: String, post: String },
    /// Show the latest comparison report
    #[command(alias = "r")]
    Report,
    /// Print the data folder paths
    #[command(alias = "f")]
    Folder,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| env::var_os("MACDIFF_DATA").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("macdiff-data"))
    }
}

/// Wires the service the way every subcommand needs it.
pub fn build_service(cfg: &Config) -> anyhow::Result<ValidationService> {
    let store = FsSnapshotStore::open(&cfg.data_dir)?;
    let vendors: Box<dyn VendorRepository> = if cfg.no_vendors {
        Box::new(NoVendors)
    } else {
        Box::new(OuiVendorRepo)
    };
    Ok(ValidationService::new(
        Box::new(store),
        vendors,
        cfg.reports_dir(),
    ))
}
