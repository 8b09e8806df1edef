use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{vertex::Vertex, Weight};

#[derive(Clone, Eq, PartialEq)]
pub struct DijkstraQueueElement {
    pub weight: Weight,
    pub vertex: Vertex,
}

impl DijkstraQueueElement {
    pub fn new(weight: Weight, vertex: Vertex) -> DijkstraQueueElement {
        DijkstraQueueElement { weight, vertex }
    }
}

// The priority queue depends on `Ord`. Flip the weight comparison so the
// max-heap becomes a min-heap; ties fall back to the vertex to keep the
// implementations of `PartialEq` and `Ord` consistent.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Default)]
pub struct HeapQueue {
    queue: BinaryHeap<DijkstraQueueElement>,
}

impl HeapQueue {
    pub fn new() -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, element: DijkstraQueueElement) {
        self.queue.push(element)
    }

    pub fn pop(&mut self) -> Option<DijkstraQueueElement> {
        self.queue.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
