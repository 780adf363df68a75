use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use employee_bst::{Record, Tree};

/// Builds a tree by inserting ids so that, without any balancing, the resultant tree is
/// full with `num_levels` levels.
fn balanced_tree(num_levels: u32) -> Tree {
    let ids: Vec<i64> = (0..2i64.pow(num_levels) - 1).collect();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &ids);
    tree
}

/// Recursive helper for [`balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree, ids: &[i64]) {
    if !ids.is_empty() {
        let mid = ids.len() / 2;
        tree.insert(Record::new(ids[mid], "bench")).expect("ids are unique");
        fill_balanced_tree(tree, &ids[..mid]);
        fill_balanced_tree(tree, &ids[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs it against trees of various
/// sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree, i64)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let tree = balanced_tree(num_levels);
        let largest_id_in_tree = 2i64.pow(num_levels) - 2;
        let id = BenchmarkId::new("balanced", largest_id_in_tree);

        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_id_in_tree));
                    time += instant.elapsed();
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "get", |tree, id| {
        let _record = black_box(tree.get(id));
    });
    bench_helper(c, "delete", |tree, id| {
        tree.delete(id);
    });
    bench_helper(c, "insert", |tree, id| {
        let _ = tree.insert(Record::new(id + 1, "new"));
    });
    bench_helper(c, "get-miss", |tree, id| {
        let _record = black_box(tree.get(id + 1));
    });
    bench_helper(c, "delete-miss", |tree, id| {
        tree.delete(id + 1);
    });
    bench_helper(c, "inorder", |tree, _| {
        black_box(tree.inorder().count());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
