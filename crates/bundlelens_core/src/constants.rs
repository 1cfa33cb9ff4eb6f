//! Fixed parameters shared across loading, filtering and reporting.

/// Hops taken from the selected node when filtering the network: the shared
/// files of the selection, then every bundle that also includes them.
pub const NEIGHBORHOOD_DEPTH: usize = 2;

/// Stats document looked up under the project root when no path is given
pub const DEFAULT_STATS_FILE: &str = "bundle-stats.json";

/// Shortest dot-separated segment treated as a content hash
pub const MIN_HASH_LEN: usize = 8;

