//! Layout generator: scale parameters in, positioned fabric out.
//!
//! Generation order is fixed: for each cluster, its spines then its leafs (group by group);
//! servers last, once, group by group. Ids follow that order starting from zero.

use crate::error::{Error, Result};
use crate::geom::{centered, point};
use crate::model::{Node, NodeId, NodeKind, Topology};
use crate::options::LayoutOptions;

/// A validated, non-negative cluster count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClusterCount(usize);

impl ClusterCount {
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for ClusterCount {
    type Error = Error;

    fn try_from(count: i64) -> Result<Self> {
        usize::try_from(count)
            .map(Self)
            .map_err(|_| Error::NegativeClusterCount { count })
    }
}

/// [`generate_with`] using [`LayoutOptions::default`].
pub fn generate(cluster_count: usize, include_servers: bool) -> Result<Topology> {
    generate_with(&LayoutOptions::default(), cluster_count, include_servers)
}

pub fn generate_with(
    opts: &LayoutOptions,
    cluster_count: usize,
    include_servers: bool,
) -> Result<Topology> {
    opts.validate()?;
    if let Some(max) = opts.max_clusters {
        if cluster_count > max {
            return Err(Error::TooManyClusters {
                count: cluster_count,
                max,
            });
        }
    }

    let mut ids = IdSeq::default();
    let mut spines = Vec::with_capacity(cluster_count * opts.spines_per_cluster);
    let mut leafs = Vec::with_capacity(cluster_count * opts.leafs_per_cluster());

    for c in 0..cluster_count {
        let z = opts.cluster_offset(c);

        for i in 0..opts.spines_per_cluster {
            spines.push(Node {
                id: ids.next(),
                kind: NodeKind::Spine,
                cluster: Some(c),
                group: None,
                slot: i,
                position: point(
                    centered(i, opts.spines_per_cluster, opts.spine_spacing),
                    opts.spine_y,
                    z,
                ),
                label: format!("Spine C{}-{}", c + 1, i + 1),
            });
        }

        for g in 0..opts.leaf_groups {
            let x = centered(g, opts.leaf_groups, opts.group_spacing);
            for j in 0..opts.leafs_per_group {
                leafs.push(Node {
                    id: ids.next(),
                    kind: NodeKind::Leaf,
                    cluster: Some(c),
                    group: Some(g),
                    slot: j,
                    position: point(
                        x,
                        opts.leaf_y,
                        centered(j, opts.leafs_per_group, opts.leaf_spacing) + z,
                    ),
                    label: format!("Leaf C{} G{}-{}", c + 1, g + 1, j + 1),
                });
            }
        }
    }

    let mut servers = Vec::new();
    if include_servers {
        servers.reserve(opts.total_servers());
        let base_z = if cluster_count > 1 {
            opts.cluster_offset(cluster_count - 1) / 2.0
        } else {
            0.0
        };
        for g in 0..opts.leaf_groups {
            let x = centered(g, opts.leaf_groups, opts.group_spacing);
            let count = opts.servers_in_group(g);
            for k in 0..count {
                servers.push(Node {
                    id: ids.next(),
                    kind: NodeKind::Server,
                    cluster: None,
                    group: Some(g),
                    slot: k,
                    position: point(
                        x,
                        opts.server_y,
                        base_z + centered(k, count, opts.server_spacing),
                    ),
                    label: format!("Server G{}-{}", g + 1, k + 1),
                });
            }
        }
    }

    tracing::debug!(
        clusters = cluster_count,
        spines = spines.len(),
        leafs = leafs.len(),
        servers = servers.len(),
        "generated fabric layout"
    );

    Ok(Topology::from_nodes(
        opts.clone(),
        cluster_count,
        spines,
        leafs,
        servers,
    ))
}

#[derive(Debug, Default)]
struct IdSeq(u32);

impl IdSeq {
    fn next(&mut self) -> NodeId {
        let id = NodeId(self.0);
        self.0 += 1;
        id
    }
}
