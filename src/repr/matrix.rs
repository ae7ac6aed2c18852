/*!
# Dense Multiplicity Matrix

[`MultiDigraph`] keeps
- the node names in first-seen order (the position is the node id),
- a name → id index for constant time lookups,
- a square matrix `adjacency[u][v]` counting how often the edge `(u, v)` was added,
- the out-degree of every node, maintained alongside the matrix.

The structure is append-only: nodes and edges can be added, but never removed.
Adding a node grows every row by one column and appends a new zero row, which costs
`O(n)` per new node and is fine for the graph sizes this crate targets.
*/

use fxhash::FxHashMap;

use crate::testing::test_graph_ops;

use super::*;

/// A directed multigraph with named nodes backed by a dense multiplicity matrix.
///
/// # Invariants
/// - `adjacency` is square with side `names.len()`
/// - `out_degree[u]` equals the sum of row `u`
/// - `num_edges` equals the sum over all cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiDigraph {
    names: Vec<String>,
    index: FxHashMap<String, Node>,
    adjacency: Vec<Vec<NumEdges>>,
    out_degree: Vec<NumEdges>,
    num_edges: NumEdges,
}

impl MultiDigraph {
    /// Returns the row of multiplicities of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[NumEdges] {
        &self.adjacency[idx(u)]
    }

    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }
}

impl GraphNew for MultiDigraph {
    fn new() -> Self {
        Self::default()
    }
}

impl GraphNodeOrder for MultiDigraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.names.len() as NumNodes
    }
}

impl GraphEdgeOrder for MultiDigraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl DirectedAdjacencyList for MultiDigraph {
    fn multiplicity(&self, u: Node, v: Node) -> NumEdges {
        self.adjacency[idx(u)][idx(v)]
    }

    fn out_degree_of(&self, u: Node) -> NumEdges {
        self.out_degree[idx(u)]
    }

    fn in_degree_of(&self, u: Node) -> NumEdges {
        self.adjacency.iter().map(|row| row[idx(u)]).sum()
    }

    // Redefine to scan the row directly instead of querying every cell
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency[idx(u)]
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| (m > 0).then_some(v as Node))
    }
}

impl NodeLabels for MultiDigraph {
    fn name_of(&self, u: Node) -> &str {
        &self.names[idx(u)]
    }

    fn id_of(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }
}

impl GraphNodeEditing for MultiDigraph {
    fn add_node(&mut self, name: &str) -> Node {
        if let Some(u) = self.id_of(name) {
            return u;
        }

        let u = self.number_of_nodes();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), u);

        for row in &mut self.adjacency {
            row.push(0);
        }
        self.adjacency.push(vec![0; self.names.len()]);
        self.out_degree.push(0);

        debug_assert!(self.adjacency.iter().all(|row| row.len() == self.names.len()));
        u
    }
}

impl GraphEdgeEditing for MultiDigraph {
    fn add_edge(&mut self, u: Node, v: Node) {
        if !self.contains_node(u) || !self.contains_node(v) {
            return;
        }

        self.adjacency[idx(u)][idx(v)] += 1;
        self.out_degree[idx(u)] += 1;
        self.num_edges += 1;
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_multi_digraph,
    MultiDigraph,
    (
        GraphNew,
        GraphNodeEditing,
        GraphEdgeEditing,
        DirectedAdjacencyList
    )
);
