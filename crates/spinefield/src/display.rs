//! Per-node display policy derived from the current focus.
//!
//! Presentation layers map [`DisplayState`] to colors/opacity; nothing here touches a render
//! buffer.

use crate::model::{Node, NodeKind, Topology, are_linked};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayState {
    /// No focus anywhere in the scene.
    Idle,
    Focused,
    /// Directly linked to the focused node.
    Connected,
    /// Something else is focused and this node is not linked to it.
    Dimmed,
}

pub fn display_state(node: &Node, focus: Option<&Node>) -> DisplayState {
    match focus {
        None => DisplayState::Idle,
        Some(f) if f.id == node.id && f.key() == node.key() => DisplayState::Focused,
        Some(f) if are_linked(f, node) => DisplayState::Connected,
        Some(_) => DisplayState::Dimmed,
    }
}

/// States for every node in [`Topology::iter`] order. A focus that is not part of `topology`
/// counts as no focus.
pub fn display_states(topology: &Topology, focus: Option<&Node>) -> Vec<DisplayState> {
    let focus = focus.and_then(|f| topology.find(f));
    topology.iter().map(|n| display_state(n, focus)).collect()
}

/// What a hover panel shows for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub label: String,
    pub kind: NodeKind,
    pub cluster: Option<usize>,
    pub group: Option<usize>,
    /// Links to the tier above (leaf → spine, server → leaf).
    pub uplinks: usize,
    /// Links to the tier below (spine → leaf, leaf → server).
    pub downlinks: usize,
}

pub fn inspect(topology: &Topology, node: &Node) -> Option<NodeInfo> {
    let node = topology.find(node)?;
    let (uplinks, downlinks) = match node.kind {
        NodeKind::Spine => (0, count(node.cluster, |c| topology.leafs_in_cluster(c).count())),
        NodeKind::Leaf => (
            count(node.cluster, |c| topology.spines_in_cluster(c).count()),
            count(node.group, |g| topology.servers_in_group(g).count()),
        ),
        NodeKind::Server => (count(node.group, |g| topology.leafs_in_group(g).count()), 0),
    };
    Some(NodeInfo {
        label: node.label.clone(),
        kind: node.kind,
        cluster: node.cluster,
        group: node.group,
        uplinks,
        downlinks,
    })
}

fn count(key: Option<usize>, f: impl FnOnce(usize) -> usize) -> usize {
    key.map(f).unwrap_or(0)
}
