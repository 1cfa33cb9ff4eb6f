use log::{debug, info};
use serde::{Serialize, Serializer};

use crate::{
    constants::NEIGHBORHOOD_DEPTH,
    error::BundleError,
    neighborhood::{Neighborhood, k_hop_neighborhood},
    network::BundleNetwork,
    types::{Link, Node},
};

fn serialize_id<S: Serializer>(node: &&Node, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&node.id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewLink<'a> {
    #[serde(serialize_with = "serialize_id")]
    pub source: &'a Node,
    #[serde(serialize_with = "serialize_id")]
    pub target: &'a Node,
}

/// The part of the network handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkView<'a> {
    pub nodes: Vec<&'a Node>,
    pub links: Vec<ViewLink<'a>>,
}

impl<'a> NetworkView<'a> {
    pub fn full(network: &'a BundleNetwork) -> Self {
        let nodes = network.nodes().iter().collect();
        let links = network
            .resolved()
            .iter()
            .map(|l| ViewLink { source: network.node(l.source), target: network.node(l.target) })
            .collect();
        NetworkView { nodes, links }
    }

    fn from_neighborhood(network: &'a BundleNetwork, hood: &Neighborhood) -> Self {
        let nodes = hood.node_indices().into_iter().map(|idx| network.node(idx)).collect();
        let resolved = network.resolved().as_slice();
        let links = hood
            .links
            .iter()
            .map(|&idx| {
                let l = resolved[idx];
                ViewLink { source: network.node(l.source), target: network.node(l.target) }
            })
            .collect();
        NetworkView { nodes, links }
    }

    pub fn root(&self) -> Option<&'a Node> {
        self.nodes.first().copied()
    }

    pub fn output_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_output()).count()
    }

    /// Links back in their identifier form.
    pub fn to_links(&self) -> Vec<Link> {
        self.links.iter().map(|l| Link::new(l.source.id.clone(), l.target.id.clone())).collect()
    }
}

/// Narrows the network to the neighbourhood of `selection`.
///
/// With no selection (or an empty one) the whole network is returned as is.
/// Otherwise the view holds the selected node, the shared files linked into
/// it, and every bundle those files also belong to. Links come in the order
/// they were found: those into the selection first, then those out of its
/// shared files.
pub fn filter_network<'a>(
    selection: Option<&str>,
    network: &'a BundleNetwork,
) -> Result<NetworkView<'a>, BundleError> {
    let Some(name) = selection.filter(|s| !s.is_empty()) else {
        debug!("No selection, showing the full network");
        return Ok(NetworkView::full(network));
    };

    let root = network
        .position(name)
        .ok_or_else(|| BundleError::UnknownSelection(name.to_string()))?;

    let hood = k_hop_neighborhood(network, root, Node::is_shared, NEIGHBORHOOD_DEPTH);
    let view = NetworkView::from_neighborhood(network, &hood);
    info!("Selection '{}' shows {} nodes and {} links", name, view.nodes.len(), view.links.len());
    Ok(view)
}
