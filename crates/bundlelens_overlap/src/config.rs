use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use bundlelens_core::{default_stats_path, find_git_root};

#[derive(Debug, Clone, Parser)]
#[command(name = "inspect")]
#[command(about = "Inspect how source files overlap across bundles")]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Bundle stats JSON file (defaults to bundle-stats.json under the root)
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Bundle or source file to focus on
    #[arg(long)]
    pub select: Option<String>,

    /// Number of files listed in the overlap ranking
    #[arg(long, default_value = "5")]
    pub top: usize,

    /// Print bundle names without their content hashes
    #[arg(long)]
    pub strip_hashes: bool,

    /// Skip the per-line source view of a selected file
    #[arg(long)]
    pub no_source: bool,
}

impl Config {
    /// Initialize the config by resolving the root directory and the stats file
    pub fn initialize(&mut self) -> Result<()> {
        if let Some(stats) = &self.stats {
            debug!("Using provided stats file: {:?}", stats);
            return Ok(());
        }

        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, searching for git root");
            find_git_root()?
        };
        info!("Using root directory: {}", root.display());

        self.stats = Some(default_stats_path(&root));
        self.root = Some(root);
        Ok(())
    }

    /// Get the stats file path, returning an error if not initialized
    pub fn stats_path(&self) -> Result<&PathBuf> {
        self.stats
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}
