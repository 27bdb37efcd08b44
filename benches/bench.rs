use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order, so every node only
/// has a right child and the tree is as tall as it is long.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..).take(num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting values in a balanced manner. This adds elements so that, without
/// any self-balancing, the resultant tree will still be balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        let _ = tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Every iteration gets a fresh clone of the tree
/// and only the closure itself is timed.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 13] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let largest_element_in_tree = tree.max().copied().unwrap_or_default();
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

/// All tests are run against balanced and unbalanced trees of various sizes and test
/// successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _found = black_box(tree.search(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        let _ = black_box(tree.delete(&i));
    });

    bench_helper(c, "insert", |tree, i| {
        let _ = black_box(tree.insert(i + 1));
    });
    bench_helper(c, "update", |tree, i| {
        let _ = black_box(tree.update(&0, i + 1));
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _found = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        let _ = black_box(tree.delete(&(i + 1)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
