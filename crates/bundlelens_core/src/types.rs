use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A source file fed into the bundler
    #[serde(rename = "input", alias = "source")]
    Source,
    /// A bundle emitted by the bundler
    #[serde(rename = "output")]
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Bundles that include this file, in bundler order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_bundle_files: Option<Vec<String>>,
}

impl Node {
    pub fn source(id: impl Into<String>, in_bundle_files: &[&str]) -> Self {
        Node {
            id: id.into(),
            kind: NodeKind::Source,
            in_bundle_files: Some(in_bundle_files.iter().map(|b| b.to_string()).collect()),
        }
    }

    pub fn output(id: impl Into<String>) -> Self {
        Node { id: id.into(), kind: NodeKind::Output, in_bundle_files: None }
    }

    /// A file is shared when more than one bundle includes it.
    pub fn is_shared(&self) -> bool {
        self.in_bundle_files.as_ref().is_some_and(|bundles| bundles.len() > 1)
    }

    pub fn is_output(&self) -> bool {
        self.kind == NodeKind::Output
    }
}

/// "bundle `target` contains file `source`", by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Link { source: source.into(), target: target.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStat {
    #[serde(default)]
    pub in_bundles: Vec<String>,
}

/// file path -> 1-based line number -> bundles including that line
pub type PerFileLineStats = HashMap<String, HashMap<usize, LineStat>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    #[serde(default)]
    pub source: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct_overlap: Option<f64>,
}

/// Everything the bundle stats document carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleData {
    #[serde(default)]
    pub network_nodes: Vec<Node>,
    #[serde(default)]
    pub network_links: Vec<Link>,
    #[serde(default)]
    pub source_files: HashMap<String, SourceFile>,
    #[serde(default)]
    pub output_files: Vec<OutputFile>,
    #[serde(default)]
    pub per_file_stats: PerFileLineStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap_files_count: Option<usize>,
}
