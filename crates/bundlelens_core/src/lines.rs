use log::{debug, trace};
use std::collections::HashMap;

use crate::{
    error::BundleError,
    types::{BundleData, LineStat, PerFileLineStats},
};

/// One source line and the bundles that ship it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOverlap<'a> {
    pub line_number: usize,
    pub content: &'a str,
    pub bundles: &'a [String],
}

impl LineOverlap<'_> {
    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_shared(&self) -> bool {
        self.bundles.len() > 1
    }

    /// Bundle names, one per line.
    pub fn tooltip(&self) -> String {
        self.bundles.join("\n")
    }
}

/// Pairs each line of `file` with its per-line bundle membership.
///
/// Lines are numbered from 1. A line missing from the stats, or a file with
/// no stats at all, gets an empty bundle list.
pub fn resolve_line_overlap<'a, S: AsRef<str>>(
    file: &str,
    stats: &'a PerFileLineStats,
    source_lines: &'a [S],
) -> Vec<LineOverlap<'a>> {
    let file_stats: Option<&'a HashMap<usize, LineStat>> = stats.get(file);
    if file_stats.is_none() {
        debug!("No line stats for {}, every line counts as unbundled", file);
    }

    source_lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line_number = i + 1;
            let bundles = file_stats
                .and_then(|s| s.get(&line_number))
                .map(|stat| stat.in_bundles.as_slice())
                .unwrap_or(&[]);
            trace!("{}:{} is in {} bundles", file, line_number, bundles.len());
            LineOverlap { line_number, content: line.as_ref(), bundles }
        })
        .collect()
}

/// Per-line view of a file from the source map.
pub fn source_view<'a>(
    data: &'a BundleData,
    file: &str,
) -> Result<Vec<LineOverlap<'a>>, BundleError> {
    let source = data
        .source_files
        .get(file)
        .ok_or_else(|| BundleError::FileNotFound(file.to_string()))?;
    Ok(resolve_line_overlap(file, &data.per_file_stats, source.source.as_slice()))
}
