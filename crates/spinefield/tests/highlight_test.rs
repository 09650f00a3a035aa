use spinefield::{NodeId, NodeKey, build_highlight, generate};

#[test]
fn highlight_without_focus_is_empty() {
    let topo = generate(2, true).unwrap();
    assert!(build_highlight(&topo, None).is_empty());
}

#[test]
fn highlight_spine_reaches_its_cluster_leafs() {
    let topo = generate(1, false).unwrap();
    let spine = &topo.spines()[10];
    let segs = build_highlight(&topo, Some(spine));
    assert_eq!(segs.len(), 128);
    assert!(segs.iter().all(|s| s.start == spine.position));
}

#[test]
fn highlight_spine_ignores_other_clusters() {
    let topo = generate(4, true).unwrap();
    let spine = topo.resolve(&NodeKey::spine(2, 0)).unwrap();
    let segs = build_highlight(&topo, Some(spine));
    assert_eq!(segs.len(), 128);
    assert!(segs.iter().all(|s| (s.end.z - spine.position.z).abs() < 5.0));
}

#[test]
fn highlight_leaf_reaches_spines_and_servers() {
    let topo = generate(2, true).unwrap();
    let leaf = topo.leaf_at(1, 3, 2).unwrap();
    let segs = build_highlight(&topo, Some(leaf));
    assert_eq!(segs.len(), 64 + 64);

    let reduced = topo.leaf_at(0, 15, 0).unwrap();
    assert_eq!(build_highlight(&topo, Some(reduced)).len(), 64 + 56);

    let no_servers = generate(2, false).unwrap();
    let leaf = no_servers.leaf_at(1, 3, 2).unwrap();
    assert_eq!(build_highlight(&no_servers, Some(leaf)).len(), 64);
}

#[test]
fn highlight_server_reaches_its_group_leafs_in_every_cluster() {
    let topo = generate(3, true).unwrap();
    let server = topo.resolve(&NodeKey::server(4, 10)).unwrap();
    let segs = build_highlight(&topo, Some(server));
    assert_eq!(segs.len(), 3 * 8);
    let x = server.position.x;
    assert!(segs.iter().all(|s| s.end.x == x));
}

#[test]
fn highlight_treats_a_stale_focus_as_none() {
    let old = generate(2, true).unwrap();
    let server = old.servers()[0].clone();

    // Ids are reassigned on regeneration; the old server id is out of range here.
    let new = generate(1, false).unwrap();
    assert!(build_highlight(&new, Some(&server)).is_empty());

    let mut ghost = new.spines()[0].clone();
    ghost.id = NodeId(9_999_999);
    assert!(build_highlight(&new, Some(&ghost)).is_empty());
}

#[test]
fn highlight_rejects_an_id_that_now_names_a_different_node() {
    let with_servers = generate(1, true).unwrap();
    let server = with_servers.servers()[0].clone();

    // Two clusters reuse the same id range for cluster 1's spines and leafs.
    let grown = generate(2, false).unwrap();
    let reused = grown.node(server.id).unwrap();
    assert_ne!(reused.key(), server.key());
    assert!(build_highlight(&grown, Some(&server)).is_empty());
}
