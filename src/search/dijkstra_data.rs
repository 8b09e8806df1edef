use ahash::{HashMap, HashMapExt};

use super::path::Path;
use crate::{
    graphs::{vertex::Vertex, Weight},
    queue::{DijkstraQueueElement, HeapQueue},
};

/// Working state for one vertex during a single search invocation. An
/// absent entry in the data map means "infinite weight, no predecessor".
#[derive(Clone, Default)]
pub struct DijkstraEntry {
    pub predecessor: Option<Vertex>,
    pub weight: Option<Weight>,
    pub is_expanded: bool,
}

/// Per-invocation search state: one entry per touched vertex plus the
/// priority queue. Local to one call, so concurrent queries against the
/// same graph never share it.
pub struct DijkstraData {
    queue: HeapQueue,
    vertices: HashMap<Vertex, DijkstraEntry>,
}

impl DijkstraData {
    pub fn new(source: &Vertex) -> DijkstraData {
        let mut data = DijkstraData {
            queue: HeapQueue::new(),
            vertices: HashMap::new(),
        };

        data.vertices.entry(source.clone()).or_default().weight = Some(0);
        data.queue.push(DijkstraQueueElement::new(0, source.clone()));

        data
    }

    /// Pops the cheapest not-yet-expanded vertex. Stale queue entries left
    /// behind by later relaxations are discarded here instead of being
    /// removed eagerly on update.
    pub fn pop(&mut self) -> Option<Vertex> {
        while let Some(element) = self.queue.pop() {
            let entry = self.vertices.entry(element.vertex.clone()).or_default();
            if !entry.is_expanded {
                entry.is_expanded = true;
                return Some(element.vertex);
            }
        }

        None
    }

    /// Relaxes the edge `tail -> head`. Only a strict improvement updates
    /// the entry and re-queues `head`.
    ///
    /// The candidate weight saturates at `Weight::MAX`, the infinite
    /// sentinel, so a route whose total exceeds the weight domain is
    /// treated as no improvement rather than wrapping negative.
    pub fn update(&mut self, tail: &Vertex, head: &Vertex, edge_weight: Weight) {
        // tail has been popped, so its weight is present and final
        let alternative_weight = self.vertices[tail].weight.unwrap().saturating_add(edge_weight);
        let head_entry = self.vertices.entry(head.clone()).or_default();
        let current_weight = head_entry.weight.unwrap_or(Weight::MAX);
        if alternative_weight < current_weight {
            head_entry.predecessor = Some(tail.clone());
            head_entry.weight = Some(alternative_weight);
            self.queue
                .push(DijkstraQueueElement::new(alternative_weight, head.clone()));
        }
    }

    /// Walks the predecessor chain back from `target` and reverses it.
    /// `None` when no relaxation ever reached `target`.
    pub fn get_path(&self, target: &Vertex) -> Option<Path> {
        let weight = self.vertices.get(target)?.weight?;

        let mut route = vec![target.clone()];
        let mut current = target;
        while let Some(predecessor) = self.vertices.get(current)?.predecessor.as_ref() {
            current = predecessor;
            route.push(current.clone());
        }
        route.reverse();

        Some(Path {
            vertices: route,
            weight,
        })
    }
}
