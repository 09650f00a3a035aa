//! Escape routes: curved links between the boundary leaf groups of adjacent clusters.

use crate::geom::{Point, Segment};
use crate::model::Topology;

/// Samples the quadratic Bézier from `a` to `b` whose control point sits `dip` below the chord
/// midpoint. Returns `segments + 1` points, endpoints included.
pub fn escape_curve(a: &Point, b: &Point, dip: f64, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    let mut control = nalgebra::center(a, b);
    control.y -= dip;

    (0..=segments)
        .map(|k| {
            let t = k as f64 / segments as f64;
            let u = 1.0 - t;
            Point::from(a.coords * (u * u) + control.coords * (2.0 * u * t) + b.coords * (t * t))
        })
        .collect()
}

/// Curves joining slot `i` of the last leaf group in cluster `c` to slot `i` of the last leaf
/// group in cluster `c + 1`, each flattened into straight sub-segments.
///
/// Empty unless `enabled` and at least two clusters are requested. Leafs are looked up by
/// `(cluster, group, slot)`; pairs missing from `topology` are skipped. Curve shape comes from
/// the options the topology was generated with.
pub fn build_escape_routes(
    topology: &Topology,
    enabled: bool,
    cluster_count: usize,
) -> Vec<Segment> {
    let opts = topology.options();
    let cluster_count = cluster_count.min(topology.cluster_count());
    if !enabled || cluster_count < 2 || opts.leaf_groups == 0 {
        return Vec::new();
    }

    let last_group = opts.leaf_groups - 1;
    let mut out =
        Vec::with_capacity((cluster_count - 1) * opts.leafs_per_group * opts.escape_segments);
    for c in 0..cluster_count - 1 {
        for i in 0..opts.leafs_per_group {
            let (Some(from), Some(to)) = (
                topology.leaf_at(c, last_group, i),
                topology.leaf_at(c + 1, last_group, i),
            ) else {
                continue;
            };
            let pts = escape_curve(
                &from.position,
                &to.position,
                opts.escape_dip,
                opts.escape_segments,
            );
            out.extend(pts.windows(2).map(|w| Segment::new(w[0], w[1])));
        }
    }

    tracing::debug!(clusters = cluster_count, segments = out.len(), "built escape routes");
    out
}
