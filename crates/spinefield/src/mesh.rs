use crate::geom::Segment;
use crate::model::Topology;

/// Static background links: every spine to every leaf of its cluster, then every server to
/// every leaf of its group (across clusters). Outer loop over spines/servers, inner over leafs.
pub fn build_full_mesh(topology: &Topology) -> Vec<Segment> {
    let summary = topology.summary();
    let mut out = Vec::with_capacity(summary.links());

    for spine in topology.spines() {
        let Some(cluster) = spine.cluster else {
            continue;
        };
        for leaf in topology.leafs_in_cluster(cluster) {
            out.push(Segment::new(spine.position, leaf.position));
        }
    }

    for server in topology.servers() {
        let Some(group) = server.group else {
            continue;
        };
        for leaf in topology.leafs_in_group(group) {
            out.push(Segment::new(server.position, leaf.position));
        }
    }

    tracing::debug!(segments = out.len(), "built full mesh");
    out
}
