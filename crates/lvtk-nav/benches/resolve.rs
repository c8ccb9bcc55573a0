//! Benchmarks for navigation resolution.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lvtk_nav::{PageNode, PageTree, documentation_pages};

/// Build a page hierarchy with the specified depth and breadth.
fn create_page_tree(depth: usize, breadth: usize) -> PageTree {
    fn create_level(
        route: String,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
    ) -> PageNode {
        let children = if current_depth < max_depth {
            (0..breadth)
                .map(|i| {
                    let child = format!("{route}/section-{i}");
                    create_level(child, current_depth + 1, max_depth, breadth)
                })
                .collect()
        } else {
            Vec::new()
        };
        PageNode::new(route.clone(), format!("Level {current_depth}"), route)
            .with_children(children)
    }

    let root = PageNode::new("/docs/index", "Index", "Index").with_children(
        (0..breadth)
            .map(|i| create_level(format!("/docs/section-{i}"), 1, depth, breadth))
            .collect(),
    );
    PageTree::new(root).unwrap()
}

fn bench_documentation_table(c: &mut Criterion) {
    let tree = PageTree::new(documentation_pages()).unwrap();

    let mut group = c.benchmark_group("documentation");

    group.bench_function("resolve_hit", |b| {
        b.iter(|| tree.resolve("/documentation/coding_conventions"))
    });

    group.bench_function("resolve_miss", |b| {
        b.iter(|| tree.resolve("/documentation/nonexistent"))
    });

    group.bench_function("find_by_module_id", |b| {
        b.iter(|| tree.find_by_module_id("DocAPI"))
    });

    group.finish();
}

fn bench_resolve_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_depth");

    for depth in [2, 4, 6] {
        let tree = create_page_tree(depth, 4);
        let deepest =
            (1..=depth).fold("/docs".to_owned(), |route, _| format!("{route}/section-3"));

        group.bench_with_input(BenchmarkId::from_parameter(depth), &deepest, |b, path| {
            b.iter(|| tree.resolve(path))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_documentation_table, bench_resolve_depth);
criterion_main!(benches);
