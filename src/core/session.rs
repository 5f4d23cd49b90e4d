// per-session input data, as read from one CBLM file
use serde::{Deserialize, Serialize};

/// One node of a session: its code label plus its adjacency row.
///
/// The node's index is its position in `Session::nodes`, which is also its
/// row/column position in the session's adjacency block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub code: String,
    //one weight per node in the session, ordered identically to the rows
    pub weights: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    //file base name with the -CBLM.csv suffix stripped
    pub name: String,
    pub nodes: Vec<NodeRecord>,
}

impl Session {
    pub fn new(name: impl Into<String>, nodes: Vec<NodeRecord>) -> Self {
        Session {
            name: name.into(),
            nodes,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    //true if every adjacency row spans the session's own node count
    pub fn is_square(&self) -> bool {
        let n = self.nodes.len();
        self.nodes.iter().all(|node| node.weights.len() == n)
    }
}
