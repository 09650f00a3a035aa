use spinefield::{Error, LayoutOptions, NodeKey, NodeKind, generate, generate_with};

#[test]
fn layout_counts_scale_with_clusters() {
    for clusters in 0..=4 {
        let topo = generate(clusters, false).unwrap();
        assert_eq!(topo.spines().len(), 64 * clusters);
        assert_eq!(topo.leafs().len(), 128 * clusters);
        assert!(topo.servers().is_empty());
        assert_eq!(topo.cluster_count(), clusters);
    }
}

#[test]
fn layout_servers_are_generated_once() {
    for clusters in [0, 1, 3] {
        let topo = generate(clusters, true).unwrap();
        assert_eq!(topo.servers().len(), 15 * 64 + 56);
        assert_eq!(topo.servers().len(), 1016);
    }
    let topo = generate(2, true).unwrap();
    assert_eq!(topo.servers_in_group(15).count(), 56);
    for g in 0..15 {
        assert_eq!(topo.servers_in_group(g).count(), 64);
    }
}

#[test]
fn layout_zero_clusters_is_empty_not_an_error() {
    let topo = generate(0, false).unwrap();
    assert!(topo.is_empty());
    assert_eq!(topo.len(), 0);
}

#[test]
fn layout_single_cluster_reference_scenario() {
    let topo = generate(1, false).unwrap();
    assert_eq!(topo.spines().len(), 64);
    assert_eq!(topo.leafs().len(), 128);
    assert!(topo.spines().iter().all(|n| n.position.y == 15.0));
    assert!(topo.leafs().iter().all(|n| n.position.y == -5.0));
    assert!(topo.spines().iter().all(|n| n.position.z == 0.0));
}

#[test]
fn layout_memberships_follow_node_kind() {
    let topo = generate(3, true).unwrap();
    for n in topo.spines() {
        assert_eq!(n.kind, NodeKind::Spine);
        assert!(n.cluster.is_some());
        assert!(n.group.is_none());
    }
    for n in topo.leafs() {
        assert_eq!(n.kind, NodeKind::Leaf);
        let (c, g) = (n.cluster.unwrap(), n.group.unwrap());
        assert!(c < 3);
        assert!(g <= 15);
    }
    for n in topo.servers() {
        assert_eq!(n.kind, NodeKind::Server);
        assert!(n.cluster.is_none());
        assert!(n.group.is_some());
    }
}

#[test]
fn layout_ids_are_unique() {
    let topo = generate(3, true).unwrap();
    let mut ids: Vec<_> = topo.iter().map(|n| n.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn layout_is_centered_on_the_width_axis() {
    let topo = generate(1, true).unwrap();
    let sum_x: f64 = topo.spines().iter().map(|n| n.position.x).sum();
    assert!(sum_x.abs() < 1e-9);
    let first = &topo.spines()[0];
    let last = &topo.spines()[63];
    assert!((first.position.x + last.position.x).abs() < 1e-9);

    // Servers sit under their leaf group.
    for server in topo.servers() {
        let group = server.group.unwrap();
        let leaf = topo.leaf_at(0, group, 0).unwrap();
        assert_eq!(server.position.x, leaf.position.x);
    }
}

#[test]
fn layout_clusters_recede_in_depth() {
    let opts = LayoutOptions::default();
    let topo = generate(3, false).unwrap();
    for c in 0..3 {
        let expected = -(c as f64) * opts.cluster_spacing;
        assert!(topo.spines_in_cluster(c).all(|n| n.position.z == expected));
        let leaf_z: Vec<f64> = topo.leafs_in_cluster(c).map(|n| n.position.z).collect();
        let mean = leaf_z.iter().sum::<f64>() / leaf_z.len() as f64;
        assert!((mean - expected).abs() < 1e-9);
    }
}

#[test]
fn layout_servers_center_between_first_and_last_cluster() {
    let opts = LayoutOptions::default();
    let one = generate(1, true).unwrap();
    let mean = |t: &spinefield::Topology| {
        t.servers().iter().map(|n| n.position.z).sum::<f64>() / t.servers().len() as f64
    };
    assert!(mean(&one).abs() < 1e-9);

    let three = generate(3, true).unwrap();
    assert!((mean(&three) + opts.cluster_spacing).abs() < 1e-9);
}

#[test]
fn layout_labels_are_one_based() {
    let topo = generate(2, true).unwrap();
    assert_eq!(topo.spines()[0].label, "Spine C1-1");
    assert_eq!(topo.spines()[64 + 5].label, "Spine C2-6");
    assert_eq!(
        topo.resolve(&NodeKey::leaf(1, 15, 7)).unwrap().label,
        "Leaf C2 G16-8"
    );
    assert_eq!(
        topo.resolve(&NodeKey::server(15, 55)).unwrap().label,
        "Server G16-56"
    );
    assert!(topo.resolve(&NodeKey::server(15, 56)).is_none());
}

#[test]
fn layout_regeneration_is_structurally_identical() {
    let a = generate(2, true).unwrap();
    let b = generate(2, true).unwrap();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.key(), y.key());
        assert_eq!(x.position, y.position);
        assert_eq!(x.label, y.label);
    }
}

#[test]
fn layout_rejects_cluster_counts_above_the_maximum() {
    let opts = LayoutOptions {
        max_clusters: Some(2),
        ..Default::default()
    };
    assert!(generate_with(&opts, 2, false).is_ok());
    assert!(matches!(
        generate_with(&opts, 3, false),
        Err(Error::TooManyClusters { count: 3, max: 2 })
    ));
}

#[test]
fn layout_reduced_group_is_configurable() {
    let opts = LayoutOptions {
        reduced_server_group: None,
        ..Default::default()
    };
    let topo = generate_with(&opts, 1, true).unwrap();
    assert_eq!(topo.servers().len(), 16 * 64);
}

#[test]
fn layout_has_no_cluster_cap_by_default() {
    assert_eq!(LayoutOptions::default().max_clusters, None);
    let topo = generate(65, false).unwrap();
    assert_eq!(topo.spines().len(), 64 * 65);
    assert_eq!(topo.leafs().len(), 128 * 65);
    assert!(topo.leaf_at(64, 15, 7).is_some());
}
