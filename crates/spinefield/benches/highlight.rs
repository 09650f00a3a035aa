use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spinefield::{NodeKey, build_highlight, generate};
use std::hint::black_box;
use std::time::Duration;

// Highlight cost must track the focused node's cluster/group, not the fabric size; the
// cluster counts below should produce flat timings.
fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    group.measurement_time(Duration::from_secs(5));

    for clusters in [1usize, 4, 16] {
        let topo = generate(clusters, true).expect("layout");
        let focuses = [
            ("spine", NodeKey::spine(0, 0)),
            ("leaf", NodeKey::leaf(0, 15, 0)),
            ("server", NodeKey::server(3, 0)),
        ];
        for (name, key) in focuses {
            let node = topo.resolve(&key).expect("focus node").clone();
            group.bench_with_input(
                BenchmarkId::new(name, clusters),
                &node,
                |b, node| {
                    b.iter(|| {
                        let segs = build_highlight(black_box(&topo), Some(black_box(node)));
                        black_box(segs.len());
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_highlight);
criterion_main!(benches);
