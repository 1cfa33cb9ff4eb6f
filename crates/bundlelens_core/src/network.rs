use log::{debug, trace};
use std::collections::HashMap;

use crate::{
    error::{BundleError, Endpoint},
    types::{Link, Node},
};

/// A link whose endpoints have been matched to node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedLink {
    pub source: usize,
    pub target: usize,
}

/// Resolved counterpart of a link list, same length and order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLinks {
    links: Vec<ResolvedLink>,
}

impl ResolvedLinks {
    pub fn as_slice(&self) -> &[ResolvedLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedLink> {
        self.links.iter()
    }
}

/// Matches every link endpoint to the node carrying that identifier.
///
/// Identifiers are looked up in a map built from `nodes`; when two nodes share
/// an identifier the first one wins, matching [`BundleNetwork::position`].
/// The inputs are never modified, so calling this repeatedly on the same
/// slices always yields the same result.
///
/// # Errors
/// Returns [`BundleError::DanglingReference`] for the first endpoint that names
/// no node.
pub fn resolve_links(nodes: &[Node], links: &[Link]) -> Result<ResolvedLinks, BundleError> {
    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
    for (idx, node) in nodes.iter().enumerate() {
        by_id.entry(node.id.as_str()).or_insert(idx);
    }

    let lookup = |link: usize, endpoint: Endpoint, id: &str| {
        by_id.get(id).copied().ok_or_else(|| BundleError::DanglingReference {
            link,
            endpoint,
            id: id.to_string(),
        })
    };

    let mut resolved = Vec::with_capacity(links.len());
    for (idx, link) in links.iter().enumerate() {
        let source = lookup(idx, Endpoint::Source, &link.source)?;
        let target = lookup(idx, Endpoint::Target, &link.target)?;
        trace!("Resolved link {} -> {} to ({}, {})", link.source, link.target, source, target);
        resolved.push(ResolvedLink { source, target });
    }

    debug!("Resolved {} links against {} nodes", resolved.len(), nodes.len());
    Ok(ResolvedLinks { links: resolved })
}

/// The full file/bundle graph with links resolved once up front.
#[derive(Debug, Clone, Default)]
pub struct BundleNetwork {
    nodes: Vec<Node>,
    links: Vec<Link>,
    resolved: ResolvedLinks,
}

impl BundleNetwork {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self, BundleError> {
        let resolved = resolve_links(&nodes, &links)?;
        Ok(BundleNetwork { nodes, links, resolved })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn resolved(&self) -> &ResolvedLinks {
        &self.resolved
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }
}
