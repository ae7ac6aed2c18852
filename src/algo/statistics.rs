use super::*;

/// Aggregate degree statistics of a directed multigraph.
///
/// Degrees count parallel edges with their multiplicity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DegreeStatistics {
    pub number_of_nodes: NumNodes,
    pub number_of_edges: NumEdges,
    pub min_in_degree: NumEdges,
    pub max_in_degree: NumEdges,
    pub min_out_degree: NumEdges,
    pub max_out_degree: NumEdges,
}

impl DegreeStatistics {
    /// Computes the statistics in a single scan over all nodes.
    ///
    /// An empty graph reports `0` everywhere.
    ///
    /// # Known limitation
    /// Both minima start at the number of nodes and are only ever lowered. If every node has a
    /// degree above `n` (possible only with parallel edges), the reported minimum is `n` instead
    /// of the true minimum.
    pub fn compute<G: DirectedAdjacencyList>(graph: &G) -> Self {
        if graph.is_empty() {
            return Self::default();
        }

        let sentinel = graph.number_of_nodes() as NumEdges;
        let mut stats = Self {
            number_of_nodes: graph.number_of_nodes(),
            number_of_edges: graph.number_of_edges(),
            min_in_degree: sentinel,
            max_in_degree: 0,
            min_out_degree: sentinel,
            max_out_degree: 0,
        };

        for u in graph.vertices() {
            let in_degree = graph.in_degree_of(u);
            let out_degree = graph.out_degree_of(u);

            stats.min_in_degree = stats.min_in_degree.min(in_degree);
            stats.max_in_degree = stats.max_in_degree.max(in_degree);
            stats.min_out_degree = stats.min_out_degree.min(out_degree);
            stats.max_out_degree = stats.max_out_degree.max(out_degree);
        }

        stats
    }
}

/// Shorthand for [`DegreeStatistics::compute`] on the graph itself
pub trait GraphStatistics {
    /// Computes the [`DegreeStatistics`] of the graph
    fn degree_statistics(&self) -> DegreeStatistics;
}

impl<G: DirectedAdjacencyList> GraphStatistics for G {
    fn degree_statistics(&self) -> DegreeStatistics {
        DegreeStatistics::compute(self)
    }
}
