use dsviz::graph::{DisjointSet, MstStatus, WeightedGraph};
use dsviz::structures::{
    BinarySearchTree, CircularList, DynamicArray, Queue, Stack, TraversalStrategy,
};
use proptest::prelude::*;
use proptest::sample::Index;

/// Property-based checks of the structure invariants against simple models
/// (a `Vec`, a sorted `Vec`, brute-force spanning tree enumeration).

#[cfg(test)]
mod property_tests {
    use super::*;

    mod generators {
        use super::*;

        #[derive(Debug, Clone)]
        pub enum ListOp {
            Push(i32),
            InsertAt(Index, i32),
            Pop,
            DeleteAt(Index),
        }

        pub fn arb_list_op() -> impl Strategy<Value = ListOp> {
            prop_oneof![
                (-50i32..50).prop_map(ListOp::Push),
                (any::<Index>(), -50i32..50).prop_map(|(i, v)| ListOp::InsertAt(i, v)),
                Just(ListOp::Pop),
                any::<Index>().prop_map(ListOp::DeleteAt),
            ]
        }

        /// Small values so duplicates are common
        pub fn arb_tree_values() -> impl Strategy<Value = Vec<i32>> {
            prop::collection::vec(0i32..10, 0..14)
        }

        /// Connected graph on 2..=6 vertices: a random spanning tree (each
        /// vertex `b > 0` hangs off a random earlier vertex) plus random extra
        /// edges. Edges are `(a, b, weight)` with `a < b`.
        pub fn arb_connected_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
            (2usize..=6)
                .prop_flat_map(|n| {
                    let pairs = n * (n - 1) / 2;
                    (
                        Just(n),
                        prop::collection::vec((any::<bool>(), 1i64..20), pairs),
                        prop::collection::vec(any::<Index>(), n),
                    )
                })
                .prop_map(|(n, picks, parents)| {
                    let mut edges = Vec::new();
                    let mut pair = 0;
                    for a in 0..n {
                        for b in (a + 1)..n {
                            let (keep, weight) = picks[pair];
                            pair += 1;
                            let tree_edge = parents[b].index(b) == a;
                            if keep || tree_edge {
                                edges.push((a, b, weight));
                            }
                        }
                    }
                    (n, edges)
                })
        }
    }

    use generators::*;

    fn label(i: usize) -> String {
        format!("v{}", i)
    }

    fn build_graph(n: usize, edges: &[(usize, usize, i64)]) -> WeightedGraph<String> {
        let mut graph = WeightedGraph::new();
        for i in 0..n {
            graph.add_vertex(label(i)).unwrap();
        }
        for &(a, b, w) in edges {
            graph.add_edge(&label(a), &label(b), w).unwrap();
        }
        graph
    }

    /// Minimum weight over every acyclic subset of `n - 1` edges
    fn brute_force_mst(n: usize, edges: &[(usize, usize, i64)]) -> Option<i64> {
        let mut best: Option<i64> = None;
        for mask in 0u32..(1u32 << edges.len()) {
            if mask.count_ones() as usize != n - 1 {
                continue;
            }
            let mut sets = DisjointSet::new(n);
            let mut total = 0;
            let mut acyclic = true;
            for (i, &(a, b, w)) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    if !sets.union(a, b).unwrap() {
                        acyclic = false;
                        break;
                    }
                    total += w;
                }
            }
            if acyclic {
                best = Some(best.map_or(total, |b| b.min(total)));
            }
        }
        best
    }

    proptest! {
        #[test]
        fn prop_stack_is_lifo(values in prop::collection::vec(any::<i32>(), 0..50)) {
            let mut stack = Stack::new();
            for &v in &values {
                stack.push(v);
            }
            prop_assert_eq!(stack.size(), values.len());

            let mut popped = Vec::new();
            while let Ok(v) = stack.pop() {
                popped.push(v);
            }
            let mut expected = values.clone();
            expected.reverse();
            prop_assert_eq!(popped, expected);
            prop_assert!(stack.peek().is_err());
        }

        #[test]
        fn prop_queue_is_fifo(values in prop::collection::vec(any::<i32>(), 0..50)) {
            let mut queue = Queue::new();
            for &v in &values {
                queue.enqueue(v);
            }
            if let Some(last) = values.last() {
                prop_assert_eq!(queue.back(), Ok(last));
            }

            let mut dequeued = Vec::new();
            while let Ok(v) = queue.dequeue() {
                dequeued.push(v);
            }
            prop_assert_eq!(dequeued, values);
        }

        #[test]
        fn prop_circular_list_matches_vec_model(ops in prop::collection::vec(arb_list_op(), 0..60)) {
            let mut list = CircularList::new();
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    ListOp::Push(v) => {
                        list.push(v);
                        model.push(v);
                    }
                    ListOp::InsertAt(i, v) => {
                        let pos = i.index(model.len() + 1);
                        list.insert_at(pos, v).unwrap();
                        model.insert(pos, v);
                    }
                    ListOp::Pop => {
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        prop_assert_eq!(list.pop().ok(), expected);
                    }
                    ListOp::DeleteAt(i) => {
                        if model.is_empty() {
                            prop_assert!(list.delete_at(0).is_err());
                        } else {
                            let pos = i.index(model.len());
                            prop_assert_eq!(list.delete_at(pos), Ok(model.remove(pos)));
                        }
                    }
                }

                prop_assert_eq!(list.size(), model.len());
                let ring: Vec<i32> = list.traverse().copied().collect();
                prop_assert_eq!(&ring, &model);
                // one full revolution lands back on the head
                prop_assert_eq!(list.walk(model.len()), model.first());
            }
        }

        #[test]
        fn prop_shell_sort_then_binary_search(
            values in prop::collection::vec(-100i32..100, 0..40),
            target in -100i32..100,
        ) {
            let mut array = DynamicArray::from_list(values.clone());
            array.shell_sort();

            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(array.as_slice(), expected.as_slice());

            match array.binary_search(&target).unwrap() {
                Some(index) => prop_assert_eq!(array.get(index), Some(&target)),
                None => prop_assert!(!values.contains(&target)),
            }
        }

        #[test]
        fn prop_bst_in_order_is_sorted(values in arb_tree_values()) {
            let tree: BinarySearchTree<i32> = values.iter().copied().collect();
            let mut expected = values.clone();
            expected.sort();

            prop_assert_eq!(tree.in_order(), expected);
            prop_assert_eq!(tree.len(), values.len());
            prop_assert!(tree.is_ordered());
        }

        #[test]
        fn prop_bst_strategies_agree(values in arb_tree_values()) {
            let recursive: BinarySearchTree<i32> = values.iter().copied().collect();
            let mut iterative = recursive.clone();
            iterative.set_strategy(TraversalStrategy::Iterative);

            prop_assert_eq!(recursive.height(), iterative.height());
            prop_assert_eq!(recursive.pre_order(), iterative.pre_order());
            prop_assert_eq!(recursive.in_order(), iterative.in_order());
            prop_assert_eq!(recursive.post_order(), iterative.post_order());
        }

        #[test]
        fn prop_bst_level_order_layout(values in arb_tree_values()) {
            let tree: BinarySearchTree<i32> = values.iter().copied().collect();
            let levels = tree.level_order().unwrap();

            // trailing missing markers are trimmed
            prop_assert!(levels.last().map_or(true, |slot| slot.is_some()));
            prop_assert_eq!(levels.iter().flatten().count(), values.len());

            for (i, slot) in levels.iter().enumerate().skip(1) {
                if let Some(value) = slot {
                    let parent = levels[(i - 1) / 2];
                    prop_assert!(parent.is_some());
                    let parent = parent.unwrap_or_default();
                    if i % 2 == 1 {
                        prop_assert!(*value <= parent);
                    } else {
                        prop_assert!(*value > parent);
                    }
                }
            }
        }

        #[test]
        fn prop_bst_delete_keeps_order(
            values in arb_tree_values(),
            removals in prop::collection::vec(0i32..10, 0..10),
        ) {
            let mut tree: BinarySearchTree<i32> = values.iter().copied().collect();
            let mut model = values.clone();

            for r in removals {
                let present = model.iter().position(|&v| v == r);
                prop_assert_eq!(tree.delete(&r), present.is_some());
                if let Some(pos) = present {
                    model.remove(pos);
                }
                prop_assert!(tree.is_ordered());
            }

            model.sort();
            prop_assert_eq!(tree.in_order(), model.clone());
            prop_assert_eq!(tree.len(), model.len());
        }

        #[test]
        fn prop_kruskal_matches_brute_force((n, edges) in arb_connected_graph()) {
            let mut graph = build_graph(n, &edges);
            let forest = graph.run_kruskal().unwrap();

            prop_assert!(forest.is_complete());
            prop_assert_eq!(forest.edges.len(), n - 1);
            prop_assert_eq!(Some(forest.total_weight), brute_force_mst(n, &edges));

            let sum: i64 = forest.edges.iter().map(|e| e.weight).sum();
            prop_assert_eq!(sum, forest.total_weight);
        }

        #[test]
        fn prop_kruskal_flags_disconnected((n, edges) in arb_connected_graph()) {
            let mut graph = build_graph(n, &edges);
            graph.add_vertex("isolated".to_string()).unwrap();

            let forest = graph.run_kruskal().unwrap();
            prop_assert_eq!(forest.status, MstStatus::Disconnected { components: 2 });
            prop_assert_eq!(forest.edges.len(), n - 1);
            prop_assert_eq!(Some(forest.total_weight), brute_force_mst(n, &edges));
        }
    }
}
