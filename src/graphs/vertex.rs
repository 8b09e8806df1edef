use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A label-addressed vertex. Identity, hashing and ordering are defined by
/// the label alone; shortest-path working state lives in the search module,
/// never here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Vertex {
        Vertex(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Vertex {
        Vertex(label.to_string())
    }
}
