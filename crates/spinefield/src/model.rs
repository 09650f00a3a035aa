//! Fabric nodes and the topology snapshot the builders read from.

use crate::geom::Point;
use crate::options::LayoutOptions;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned in generation order. Only meaningful within one [`Topology`]; a
/// regeneration hands out fresh ids, so long-lived references should hold a [`NodeKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Spine,
    Leaf,
    Server,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Spine => "spine",
            NodeKind::Leaf => "leaf",
            NodeKind::Server => "server",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural identity of a node: stable across regenerations with compatible parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey {
    pub kind: NodeKind,
    pub cluster: Option<usize>,
    pub group: Option<usize>,
    /// Index within the group (leafs, servers) or within the cluster (spines).
    pub slot: usize,
}

impl NodeKey {
    pub fn spine(cluster: usize, slot: usize) -> Self {
        Self {
            kind: NodeKind::Spine,
            cluster: Some(cluster),
            group: None,
            slot,
        }
    }

    pub fn leaf(cluster: usize, group: usize, slot: usize) -> Self {
        Self {
            kind: NodeKind::Leaf,
            cluster: Some(cluster),
            group: Some(group),
            slot,
        }
    }

    pub fn server(group: usize, slot: usize) -> Self {
        Self {
            kind: NodeKind::Server,
            cluster: None,
            group: Some(group),
            slot,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Present for spines and leafs.
    pub cluster: Option<usize>,
    /// Present for leafs and servers. Leaf groups number the position within a cluster, so
    /// group `g` exists once per cluster.
    pub group: Option<usize>,
    pub slot: usize,
    pub position: Point,
    pub label: String,
}

impl Node {
    pub fn key(&self) -> NodeKey {
        NodeKey {
            kind: self.kind,
            cluster: self.cluster,
            group: self.group,
            slot: self.slot,
        }
    }
}

/// Whether the fabric has a physical link between `a` and `b`: spine-leaf within a cluster,
/// server-leaf within a group.
pub fn are_linked(a: &Node, b: &Node) -> bool {
    fn same(x: Option<usize>, y: Option<usize>) -> bool {
        x.is_some() && x == y
    }
    match (a.kind, b.kind) {
        (NodeKind::Spine, NodeKind::Leaf) | (NodeKind::Leaf, NodeKind::Spine) => {
            same(a.cluster, b.cluster)
        }
        (NodeKind::Server, NodeKind::Leaf) | (NodeKind::Leaf, NodeKind::Server) => {
            same(a.group, b.group)
        }
        _ => false,
    }
}

/// Node and link counts of a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologySummary {
    pub clusters: usize,
    pub spines: usize,
    pub leafs: usize,
    pub servers: usize,
    pub spine_leaf_links: usize,
    pub server_leaf_links: usize,
}

impl TopologySummary {
    pub fn nodes(&self) -> usize {
        self.spines + self.leafs + self.servers
    }

    pub fn links(&self) -> usize {
        self.spine_leaf_links + self.server_leaf_links
    }
}

#[derive(Debug, Clone, Default)]
struct AdjacencyIndex {
    spines_by_cluster: Vec<Vec<usize>>,
    leafs_by_cluster: Vec<Vec<usize>>,
    leafs_by_group: Vec<Vec<usize>>,
    servers_by_group: Vec<Vec<usize>>,
    by_key: FxHashMap<NodeKey, usize>,
    by_id: FxHashMap<NodeId, (NodeKind, usize)>,
}

fn push_at(lists: &mut Vec<Vec<usize>>, key: Option<usize>, idx: usize) {
    let Some(key) = key else {
        return;
    };
    if lists.len() <= key {
        lists.resize_with(key + 1, Vec::new);
    }
    lists[key].push(idx);
}

fn pick<'a>(nodes: &'a [Node], idxs: &'a [usize]) -> impl Iterator<Item = &'a Node> {
    idxs.iter().filter_map(move |&i| nodes.get(i))
}

fn list_at(lists: &[Vec<usize>], key: Option<usize>) -> &[usize] {
    key.and_then(|k| lists.get(k))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

impl AdjacencyIndex {
    fn build(spines: &[Node], leafs: &[Node], servers: &[Node]) -> Self {
        let mut index = Self::default();
        for (kind, nodes) in [
            (NodeKind::Spine, spines),
            (NodeKind::Leaf, leafs),
            (NodeKind::Server, servers),
        ] {
            for (idx, n) in nodes.iter().enumerate() {
                debug_assert_eq!(n.kind, kind);
                index.by_key.insert(n.key(), idx);
                index.by_id.insert(n.id, (kind, idx));
                match kind {
                    NodeKind::Spine => push_at(&mut index.spines_by_cluster, n.cluster, idx),
                    NodeKind::Leaf => {
                        push_at(&mut index.leafs_by_cluster, n.cluster, idx);
                        push_at(&mut index.leafs_by_group, n.group, idx);
                    }
                    NodeKind::Server => push_at(&mut index.servers_by_group, n.group, idx),
                }
            }
        }
        index
    }
}

/// A generated fabric. The three sequences keep generation order.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    options: LayoutOptions,
    cluster_count: usize,
    spines: Vec<Node>,
    leafs: Vec<Node>,
    servers: Vec<Node>,
    index: AdjacencyIndex,
}

impl Topology {
    pub fn from_nodes(
        options: LayoutOptions,
        cluster_count: usize,
        spines: Vec<Node>,
        leafs: Vec<Node>,
        servers: Vec<Node>,
    ) -> Self {
        let index = AdjacencyIndex::build(&spines, &leafs, &servers);
        Self {
            options,
            cluster_count,
            spines,
            leafs,
            servers,
            index,
        }
    }

    /// Options the topology was generated with.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    pub fn spines(&self) -> &[Node] {
        &self.spines
    }

    pub fn leafs(&self) -> &[Node] {
        &self.leafs
    }

    pub fn servers(&self) -> &[Node] {
        &self.servers
    }

    pub fn has_servers(&self) -> bool {
        !self.servers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.spines.len() + self.leafs.len() + self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All nodes: spines, then leafs, then servers.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.spines
            .iter()
            .chain(self.leafs.iter())
            .chain(self.servers.iter())
    }

    fn by_kind(&self, kind: NodeKind) -> &[Node] {
        match kind {
            NodeKind::Spine => &self.spines,
            NodeKind::Leaf => &self.leafs,
            NodeKind::Server => &self.servers,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let &(kind, idx) = self.index.by_id.get(&id)?;
        self.by_kind(kind).get(idx)
    }

    pub fn resolve(&self, key: &NodeKey) -> Option<&Node> {
        let &idx = self.index.by_key.get(key)?;
        self.by_kind(key.kind).get(idx)
    }

    /// Looks `node` up by id and checks that the entry found is structurally the same node.
    /// A node carried over from an earlier generation usually fails this check.
    pub fn find(&self, node: &Node) -> Option<&Node> {
        self.node(node.id).filter(|n| n.key() == node.key())
    }

    pub fn leaf_at(&self, cluster: usize, group: usize, slot: usize) -> Option<&Node> {
        self.resolve(&NodeKey::leaf(cluster, group, slot))
    }

    pub fn spines_in_cluster(&self, cluster: usize) -> impl Iterator<Item = &Node> {
        pick(
            &self.spines,
            list_at(&self.index.spines_by_cluster, Some(cluster)),
        )
    }

    pub fn leafs_in_cluster(&self, cluster: usize) -> impl Iterator<Item = &Node> {
        pick(&self.leafs, list_at(&self.index.leafs_by_cluster, Some(cluster)))
    }

    /// Leafs of group `group` across every cluster.
    pub fn leafs_in_group(&self, group: usize) -> impl Iterator<Item = &Node> {
        pick(&self.leafs, list_at(&self.index.leafs_by_group, Some(group)))
    }

    pub fn servers_in_group(&self, group: usize) -> impl Iterator<Item = &Node> {
        pick(
            &self.servers,
            list_at(&self.index.servers_by_group, Some(group)),
        )
    }

    /// Directly linked nodes of `node`. Leafs list their spines first, then their servers.
    pub fn neighbors(&self, node: &Node) -> Vec<&Node> {
        let index = &self.index;
        match node.kind {
            NodeKind::Spine => {
                pick(&self.leafs, list_at(&index.leafs_by_cluster, node.cluster)).collect()
            }
            NodeKind::Leaf => pick(&self.spines, list_at(&index.spines_by_cluster, node.cluster))
                .chain(pick(
                    &self.servers,
                    list_at(&index.servers_by_group, node.group),
                ))
                .collect(),
            NodeKind::Server => {
                pick(&self.leafs, list_at(&index.leafs_by_group, node.group)).collect()
            }
        }
    }

    pub fn summary(&self) -> TopologySummary {
        let index = &self.index;
        let spine_leaf_links = index
            .spines_by_cluster
            .iter()
            .enumerate()
            .map(|(c, spines)| spines.len() * list_at(&index.leafs_by_cluster, Some(c)).len())
            .sum();
        let server_leaf_links = index
            .servers_by_group
            .iter()
            .enumerate()
            .map(|(g, servers)| servers.len() * list_at(&index.leafs_by_group, Some(g)).len())
            .sum();
        TopologySummary {
            clusters: self.cluster_count,
            spines: self.spines.len(),
            leafs: self.leafs.len(),
            servers: self.servers.len(),
            spine_leaf_links,
            server_leaf_links,
        }
    }
}
