use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in insertion order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all node ids.
    /// In contrast to self.vertices(), the range does not borrow self.
    fn vertices_range(&self) -> NodeRange {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edge insertions, ie. parallel edges are counted with multiplicity
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Getters for neighborhoods & degrees of a directed multigraph.
///
/// All degrees count parallel edges with their multiplicity. Neighbor iterators on the other
/// hand yield every *distinct* neighbor exactly once in increasing order.
pub trait DirectedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns the number of edges `(u, v)` that were added to the graph
    /// ** Panics if `u >= n || v >= n` **
    fn multiplicity(&self, u: Node, v: Node) -> NumEdges;

    /// Returns the number of outgoing edges of `u` (with multiplicity)
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumEdges;

    /// Returns the number of incoming edges of `u` (with multiplicity)
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumEdges {
        self.vertices().map(|v| self.multiplicity(v, u)).sum()
    }

    /// Returns an iterator over all distinct targets `v` of edges `(u, v)` in increasing order
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&v| self.multiplicity(u, v) > 0)
    }

    /// Returns *true* if at least one edge `(u, v)` exists
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.multiplicity(u, v) > 0
    }

    /// Returns *true* if `u` has no outgoing edges
    /// ** Panics if `u >= n` **
    fn is_dangling(&self, u: Node) -> bool {
        self.out_degree_of(u) == 0
    }

    node_iterator!(out_degrees, out_degree_of, NumEdges);
    node_iterator!(in_degrees, in_degree_of, NumEdges);

    /// Returns an iterator over all distinct edges together with their multiplicity,
    /// ordered by source and then by target.
    fn edges_with_multiplicity(&self) -> impl Iterator<Item = (Edge, NumEdges)> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.out_neighbors_of(u)
                .map(move |v| (Edge(u, v), self.multiplicity(u, v)))
        })
    }
}

/// Access to the names attached to nodes
pub trait NodeLabels: GraphNodeOrder {
    /// Returns the name of `u`
    /// ** Panics if `u >= n` **
    fn name_of(&self, u: Node) -> &str;

    /// Returns the id of the node called `name` if it exists (case-sensitive)
    fn id_of(&self, name: &str) -> Option<Node>;

    /// Returns an iterator over all names in insertion order
    fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices().map(|u| self.name_of(u))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without nodes
    fn new() -> Self;
}

/// Provides functions to insert named nodes
pub trait GraphNodeEditing: NodeLabels {
    /// Adds a node called `name` and returns its id.
    /// If the name is already known, the existing id is returned and the graph is left unchanged.
    fn add_node(&mut self, name: &str) -> Node;
}

/// Provides functions to insert edges. There is no way to remove anything again.
pub trait GraphEdgeEditing: GraphNodeEditing {
    /// Adds one edge *(u,v)* to the graph, increasing its multiplicity by one.
    /// Does nothing if `u >= n || v >= n`.
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds one edge between the nodes called `from` and `to`.
    /// Does nothing if either name is unknown.
    fn add_edge_by_name(&mut self, from: &str, to: &str) {
        if let (Some(u), Some(v)) = (self.id_of(from), self.id_of(to)) {
            self.add_edge(u, v);
        }
    }

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a list of named edges
pub trait GraphFromScratch {
    /// Creates a graph by registering both endpoints of every pair (in order) and then
    /// adding the edge between them.
    fn from_named_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_named_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_node(from);
            graph.add_node(to);
            graph.add_edge_by_name(from, to);
        }
        graph
    }
}
