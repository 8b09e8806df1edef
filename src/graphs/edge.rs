use serde::{Deserialize, Serialize};

use super::{vertex::Vertex, Weight};

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Debug)]
pub struct DirectedWeightedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Weight,
}

impl DirectedWeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> DirectedWeightedEdge {
        DirectedWeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> &Vertex {
        &self.tail
    }

    pub fn head(&self) -> &Vertex {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint pair without the weight. Duplicate detection keys on
    /// this, so two edges with equal endpoints collide whatever their
    /// weights.
    pub fn unweighted(&self) -> DirectedEdge {
        DirectedEdge {
            tail: self.tail.clone(),
            head: self.head.clone(),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedEdge {
    tail: Vertex,
    head: Vertex,
}

impl DirectedEdge {
    pub fn new(tail: Vertex, head: Vertex) -> DirectedEdge {
        DirectedEdge { tail, head }
    }

    pub fn tail(&self) -> &Vertex {
        &self.tail
    }

    pub fn head(&self) -> &Vertex {
        &self.head
    }
}
