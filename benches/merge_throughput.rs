//! Benchmarks for the resolution-path pipeline.
//!
//! Measures extraction, splitting, and merging over synthetic forests shaped
//! like deep component trees, at sizes typical of a single inspected
//! application.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use injectree::descriptor::InjectorDescriptor;
use injectree::forest::InspectedNode;
use injectree::paths::{merge_paths, resolution_paths, split_injector_paths};

/// Build a linear component tree of `depth` nodes. Each node reports its
/// full element ancestry, one environment ancestor per four levels, and the
/// shared null root — roughly the chain shape a real inspected app produces.
fn linear_forest(depth: usize) -> Vec<InspectedNode> {
    fn build(level: usize, depth: usize) -> InspectedNode {
        let mut chain = Vec::new();
        for ancestor in (0..=level).rev() {
            chain.push(InjectorDescriptor::element(
                format!("el-{ancestor}"),
                format!("Component{ancestor}"),
            ));
        }
        for module in 0..=(level / 4) {
            chain.push(InjectorDescriptor::environment(
                format!("env-{module}"),
                format!("Module{module}"),
            ));
        }
        chain.push(InjectorDescriptor::null_root("null"));

        let mut node = InspectedNode::new(format!("Component{level}")).with_chain(chain);
        if level + 1 < depth {
            node = node.with_child(build(level + 1, depth));
        }
        node
    }
    vec![build(0, depth)]
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for depth in [16, 64, 256] {
        let forest = linear_forest(depth);

        group.bench_with_input(BenchmarkId::new("extract", depth), &forest, |b, forest| {
            b.iter(|| resolution_paths(black_box(forest)));
        });

        let records = resolution_paths(&forest);
        group.bench_with_input(BenchmarkId::new("split", depth), &records, |b, records| {
            b.iter(|| split_injector_paths(black_box(records)));
        });

        group.bench_with_input(BenchmarkId::new("merge", depth), &records, |b, records| {
            b.iter(|| merge_paths(black_box(records)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
