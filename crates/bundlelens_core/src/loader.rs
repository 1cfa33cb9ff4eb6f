use anyhow::{Result, anyhow};
use log::{debug, info, trace};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{constants::DEFAULT_STATS_FILE, error::BundleError, types::BundleData};

pub fn find_git_root() -> Result<PathBuf> {
    find_git_root_from(&env::current_dir()?)
}

pub fn find_git_root_from(start: &Path) -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = start.to_path_buf();
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!("Could not find .git directory in any parent folder"));
            }
        }
    }
}

/// Where the stats document lives when no explicit path is given.
pub fn default_stats_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_STATS_FILE)
}

/// Reads and parses a bundle stats document.
pub fn load_bundle_data(path: &Path) -> Result<BundleData, BundleError> {
    debug!("Loading bundle stats from {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|source| BundleError::Load { path: path.to_path_buf(), source })?;
    let data: BundleData = serde_json::from_str(&text)
        .map_err(|source| BundleError::Parse { path: path.to_path_buf(), source })?;

    info!(
        "Loaded {} nodes, {} links, {} source files, {} bundles",
        data.network_nodes.len(),
        data.network_links.len(),
        data.source_files.len(),
        data.output_files.len()
    );
    Ok(data)
}
