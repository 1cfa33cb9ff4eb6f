//! Core model and transforms for inspecting bundle overlap.
//!
//! This crate works on the stats a module bundler leaves behind: which source
//! files went into which output bundles, and which bundles include each line
//! of each file. It provides:
//! - Loading the stats document
//! - Resolving links between files and bundles once up front
//! - Filtering the network down to the neighbourhood of a selected node
//! - Per-line bundle membership for a source file
//! - Summary figures and a per-file overlap ranking

mod constants;
mod error;
mod filter;
mod lines;
mod loader;
mod names;
mod neighborhood;
mod network;
mod summary;
mod types;

// Re-export public API
pub use constants::{DEFAULT_STATS_FILE, MIN_HASH_LEN, NEIGHBORHOOD_DEPTH};
pub use error::{BundleError, Endpoint};
pub use filter::{NetworkView, ViewLink, filter_network};
pub use lines::{LineOverlap, resolve_line_overlap, source_view};
pub use loader::{default_stats_path, find_git_root, find_git_root_from, load_bundle_data};
pub use names::strip_hashes;
pub use neighborhood::{Neighborhood, k_hop_neighborhood};
pub use network::{BundleNetwork, ResolvedLink, ResolvedLinks, resolve_links};
pub use summary::{
    FileDetail, FileOverlap, Summary, count_overlapping_bundles, format_percent,
    rank_file_overlap,
};
pub use types::{
    BundleData, LineStat, Link, Node, NodeKind, OutputFile, PerFileLineStats, SourceFile,
};
