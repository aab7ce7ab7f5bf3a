#![no_main]

use arbitrary::Arbitrary;
use dsviz::graph::WeightedGraph;
use dsviz::structures::{
    BinarySearchTree, CircularList, DynamicArray, Queue, Stack, MAX_LEVEL_ORDER_HEIGHT,
};
use libfuzzer_sys::fuzz_target;

const MAX_OPS: usize = 512;
const MAX_VERTICES: u8 = 16;

#[derive(Arbitrary, Debug)]
enum Op {
    StackPush(i16),
    StackPop,
    Enqueue(i16),
    Dequeue,
    ArrayInsert(u8, i16),
    ArrayDelete(u8),
    ArraySort,
    ArraySearch(i16),
    ListInsert(u8, i16),
    ListDelete(u8),
    ListWalk(u16),
    TreeInsert(i16),
    TreeDelete(i16),
    TreeSnapshot,
    AddVertex(u8),
    AddEdge(u8, u8, i8),
    Kruskal,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut stack = Stack::new();
    let mut queue = Queue::new();
    let mut array = DynamicArray::new();
    let mut list = CircularList::new();
    let mut tree = BinarySearchTree::new();
    let mut graph: WeightedGraph<u8> = WeightedGraph::new();

    for op in ops.into_iter().take(MAX_OPS) {
        match op {
            Op::StackPush(v) => stack.push(v),
            Op::StackPop => {
                let _ = stack.pop();
            }
            Op::Enqueue(v) => queue.enqueue(v),
            Op::Dequeue => {
                let _ = queue.dequeue();
            }
            Op::ArrayInsert(i, v) => {
                let _ = array.insert_at(i as usize, v);
            }
            Op::ArrayDelete(i) => {
                let _ = array.delete_at(i as usize);
            }
            Op::ArraySort => {
                array.shell_sort();
                assert!(array.as_slice().windows(2).all(|w| w[0] <= w[1]));
            }
            Op::ArraySearch(v) => {
                if let Ok(Some(index)) = array.binary_search(&v) {
                    assert_eq!(array.get(index), Some(&v));
                }
            }
            Op::ListInsert(p, v) => {
                let _ = list.insert_at(p as usize, v);
            }
            Op::ListDelete(p) => {
                let _ = list.delete_at(p as usize);
            }
            Op::ListWalk(steps) => {
                assert_eq!(list.walk(steps as usize).is_some(), !list.is_empty());
                assert_eq!(list.traverse().count(), list.size());
            }
            Op::TreeInsert(v) => tree.insert(v),
            Op::TreeDelete(v) => {
                let had = tree.contains(&v);
                assert_eq!(tree.delete(&v), had);
                assert!(tree.is_ordered());
            }
            Op::TreeSnapshot => {
                if let Ok(levels) = tree.level_order_bounded(MAX_LEVEL_ORDER_HEIGHT) {
                    assert_eq!(levels.iter().flatten().count(), tree.len());
                }
            }
            Op::AddVertex(v) => {
                let _ = graph.add_vertex(v % MAX_VERTICES);
            }
            Op::AddEdge(a, b, w) => {
                let _ = graph.add_edge(&(a % MAX_VERTICES), &(b % MAX_VERTICES), w as i64);
            }
            Op::Kruskal => {
                let vertices = graph.vertex_count();
                if let Ok(forest) = graph.run_kruskal() {
                    assert!(forest.edges.len() < vertices);
                    assert!(forest.total_weight > 0);
                }
            }
        }
    }
});
