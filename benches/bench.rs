use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_tree::OrderedTree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting keys in ascending order. Without rebalancing this is a list.
fn get_unbalanced_tree(num_levels: usize) -> OrderedTree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a tree by inserting keys so that every one of the `num_levels` levels is full.
fn get_balanced_tree(num_levels: usize) -> OrderedTree<i32> {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut tree = OrderedTree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut OrderedTree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of trees before finishing the group. Every iteration works on a fresh clone so
/// mutating closures always start from the same shape.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut OrderedTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        black_box(tree.contains(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "contains-miss", |tree, i| {
        black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_helper(c, "get_range-narrow", |tree, i| {
        black_box(tree.get_range(&(i - 4), &i));
    });
    bench_helper(c, "remove_leaves", |tree, _| {
        black_box(tree.remove_leaves());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
