use log::{debug, info};
use rayon::prelude::*;
use std::{
    collections::{BTreeSet, HashSet},
    fmt,
};

use crate::{lines::resolve_line_overlap, network::BundleNetwork, types::BundleData};

/// Formats a 0..=1 ratio with one decimal place, e.g. `12.5%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Counts bundles that include at least one shared file.
pub fn count_overlapping_bundles(network: &BundleNetwork) -> usize {
    let overlapping: HashSet<usize> = network
        .resolved()
        .iter()
        .filter(|l| network.node(l.source).is_shared() && network.node(l.target).is_output())
        .map(|l| l.target)
        .collect();
    debug!("{} bundles contain shared files", overlapping.len());
    overlapping.len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub source_file_count: usize,
    pub bundle_count: usize,
    pub overlapping_bundle_count: usize,
}

impl Summary {
    /// Uses the document's overlap count when present, otherwise derives it.
    pub fn new(data: &BundleData, network: &BundleNetwork) -> Self {
        let overlapping_bundle_count =
            data.overlap_files_count.unwrap_or_else(|| count_overlapping_bundles(network));
        Summary {
            source_file_count: data.source_files.len(),
            bundle_count: data.output_files.len(),
            overlapping_bundle_count,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files were bundled into {} bundles. Of those, {} bundles have overlaps",
            self.source_file_count, self.bundle_count, self.overlapping_bundle_count
        )
    }
}

/// Line overlap totals for a single source file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileOverlap {
    pub file: String,
    pub total_lines: usize,
    /// Lines included in more than one bundle
    pub overlapping_lines: usize,
    /// Distinct bundles including any line of the file
    pub bundle_count: usize,
}

impl FileOverlap {
    pub fn compute<S: AsRef<str>>(file: &str, data: &BundleData, lines: &[S]) -> Self {
        let rows = resolve_line_overlap(file, &data.per_file_stats, lines);
        let overlapping_lines = rows.iter().filter(|r| r.is_shared()).count();
        let bundles: BTreeSet<&str> =
            rows.iter().flat_map(|r| r.bundles.iter().map(String::as_str)).collect();
        FileOverlap {
            file: file.to_string(),
            total_lines: rows.len(),
            overlapping_lines,
            bundle_count: bundles.len(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            self.overlapping_lines as f64 / self.total_lines as f64
        }
    }
}

/// The headline for a selected file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDetail(pub FileOverlap);

impl fmt::Display for FileDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File {} is: {} overlapping lines across {} bundles",
            self.0.file,
            format_percent(self.0.ratio()),
            self.0.bundle_count
        )
    }
}

/// Every source file's overlap, most overlapping lines first, ties by path.
pub fn rank_file_overlap(data: &BundleData) -> Vec<FileOverlap> {
    info!("Ranking overlap for {} source files", data.source_files.len());

    let mut ranked: Vec<FileOverlap> = data
        .source_files
        .par_iter()
        .map(|(file, source)| FileOverlap::compute(file, data, source.source.as_slice()))
        .collect();

    ranked.sort_by(|a, b| {
        b.overlapping_lines.cmp(&a.overlapping_lines).then_with(|| a.file.cmp(&b.file))
    });
    debug!(
        "{} of {} files have overlapping lines",
        ranked.iter().filter(|f| f.overlapping_lines > 0).count(),
        ranked.len()
    );
    ranked
}
