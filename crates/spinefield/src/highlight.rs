use crate::geom::Segment;
use crate::model::{Node, Topology};

/// Links touching `focus`, drawn from the focused node outwards.
///
/// Only the focused node's cluster/group is visited, so the cost does not grow with the number
/// of clusters. A focus that does not belong to `topology` (e.g. held across a regeneration)
/// yields no segments.
pub fn build_highlight(topology: &Topology, focus: Option<&Node>) -> Vec<Segment> {
    let Some(focus) = focus.and_then(|f| topology.find(f)) else {
        return Vec::new();
    };

    let out: Vec<Segment> = topology
        .neighbors(focus)
        .into_iter()
        .map(|n| Segment::new(focus.position, n.position))
        .collect();

    tracing::trace!(node = %focus.id, kind = %focus.kind, segments = out.len(), "built highlight");
    out
}
