use log::{debug, trace};
use std::collections::HashSet;

use crate::{network::BundleNetwork, types::Node};

/// Nodes and links reached from a root, grouped by hop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighborhood {
    pub root: usize,
    /// Node indices first reached at each hop, in node order
    pub hops: Vec<Vec<usize>>,
    /// Link indices in the order they were collected, without repeats
    pub links: Vec<usize>,
}

impl Neighborhood {
    /// Root first, then each hop's nodes.
    pub fn node_indices(&self) -> Vec<usize> {
        let mut out = vec![self.root];
        for hop in &self.hops {
            out.extend(hop.iter().copied());
        }
        out
    }
}

/// Breadth-first walk over the bipartite file/bundle graph.
///
/// Hops alternate direction. Odd hops follow links pointing *into* the
/// frontier (the files a bundle contains) and only admit nodes that pass
/// `admit`. Even hops follow links pointing *out of* the frontier (every bundle
/// containing a frontier file) without filtering.
///
/// Every link touching the frontier on the walking side is collected, even
/// when its far end was already visited; such links are recorded once.
///
/// # Arguments
/// * `network` - The resolved bundle network
/// * `root` - Index of the starting node
/// * `admit` - Gate for nodes reached on inward hops
/// * `depth` - Number of hops to take
pub fn k_hop_neighborhood<F>(
    network: &BundleNetwork,
    root: usize,
    admit: F,
    depth: usize,
) -> Neighborhood
where
    F: Fn(&Node) -> bool,
{
    let mut visited: HashSet<usize> = HashSet::from([root]);
    let mut seen_links: HashSet<usize> = HashSet::new();
    let mut frontier: HashSet<usize> = HashSet::from([root]);
    let mut result = Neighborhood { root, hops: Vec::with_capacity(depth), links: Vec::new() };

    for hop in 1..=depth {
        let inward = hop % 2 == 1;
        let direction = if inward { "inward" } else { "outward" };
        trace!("Hop {} ({}) from {} frontier nodes", hop, direction, frontier.len());

        let mut reached: HashSet<usize> = HashSet::new();
        let mut hop_links: Vec<usize> = Vec::new();

        for (idx, link) in network.resolved().iter().enumerate() {
            let (near, far) =
                if inward { (link.target, link.source) } else { (link.source, link.target) };
            if !frontier.contains(&near) {
                continue;
            }
            if inward && !admit(network.node(far)) {
                trace!("Skipping {} at hop {}", network.node(far).id, hop);
                continue;
            }
            hop_links.push(idx);
            reached.insert(far);
        }

        for idx in hop_links {
            if seen_links.insert(idx) {
                result.links.push(idx);
            }
        }

        let mut fresh: Vec<usize> =
            reached.into_iter().filter(|idx| visited.insert(*idx)).collect();
        fresh.sort_unstable();
        debug!("Hop {} reached {} new nodes", hop, fresh.len());

        frontier = fresh.iter().copied().collect();
        result.hops.push(fresh);
        if frontier.is_empty() {
            break;
        }
    }

    result
}
