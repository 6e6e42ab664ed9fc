use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use balanced_bst::traversal::Order;
use balanced_bst::tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting keys in ascending order. Nothing rebalances on
/// insert so this ends up as one long right spine.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in (0..).take(num_nodes_in_full_tree(num_levels)) {
        tree.insert(x);
    }

    tree
}

/// Builds a tree with `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    Tree::from_keys((0..).take(num_nodes_in_full_tree(num_levels)))
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. The closure gets its own copy of the tree.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Recursion on the unbalanced trees goes one frame per node so sizes stay modest.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_batched_ref(
                    || tree.clone(),
                    |tree| f(tree, black_box(largest_element_in_tree as i32)),
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

/// All benchmarks run against balanced and unbalanced trees of various sizes and cover
/// successful and unsuccessful lookups.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "is-balanced", |tree, _| {
        black_box(tree.is_balanced());
    });
    bench_helper(c, "in-order", |tree, _| {
        black_box(tree.iter(Order::In).count());
    });
    bench_helper(c, "rebalance", |tree, _| {
        tree.rebalance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
