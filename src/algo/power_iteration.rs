use tracing::{debug, trace};

use super::*;

/// Computes ranks by power iteration over the damped transition matrix of a graph.
///
/// The transition matrix `T` of a graph with `n` nodes is
/// - `T[u][v] = 1/n` if `u` has no outgoing edges (dangling node), and
/// - `T[u][v] = p/n + (1 - p) * m(u, v) / out_degree(u)` otherwise,
///
/// where `m(u, v)` is the multiplicity of edge `(u, v)`. Every row sums up to `1`.
/// Starting from the uniform distribution, the row vector is multiplied with `T` exactly
/// `iterations` times; there is no early stopping.
#[derive(Debug, Copy, Clone)]
pub struct PowerIteration {
    damping: f64,
    iterations: u64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: DEFAULT_RESET_PROBABILITY,
            iterations: 0,
        }
    }
}

impl PowerIteration {
    /// Creates a new power iteration with `p = 0.1` and no iterations
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the damping factor `p`. Values outside `(0, 1]` turn the iteration into a no-op.
    pub fn damping(mut self, p: f64) -> Self {
        self.damping = p;
        self
    }

    /// Updates the number of matrix-vector products. `0` turns the iteration into a no-op.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Returns *true* if running the iteration on `graph` actually computes something
    pub fn is_applicable<G: GraphNodeOrder>(&self, graph: &G) -> bool {
        rank_preconditions_hold(graph, self.damping, self.iterations)
    }

    /// Builds the `n x n` row-stochastic transition matrix of `graph` (row-major).
    pub fn transition_matrix<G: DirectedAdjacencyList>(&self, graph: &G) -> Vec<Vec<f64>> {
        let n = graph.len();
        let uniform = 1.0 / n as f64;
        let p = self.damping;

        graph
            .vertices()
            .map(|u| {
                let out_degree = graph.out_degree_of(u);
                if out_degree == 0 {
                    return vec![uniform; n];
                }

                let out_degree = out_degree as f64;
                graph
                    .vertices()
                    .map(|v| {
                        let follow = graph.multiplicity(u, v) as f64 / out_degree;
                        p * uniform + (1.0 - p) * follow
                    })
                    .collect()
            })
            .collect()
    }

    /// Writes the rank of every node `u` into `ranks[u]`.
    /// If the iteration is not applicable, `ranks` is left untouched.
    ///
    /// ** Panics if `ranks.len() < n` **
    pub fn rank_into<G: DirectedAdjacencyList>(&self, graph: &G, ranks: &mut [f64]) {
        if !self.is_applicable(graph) {
            return;
        }

        let n = graph.len();
        debug!(
            nodes = n,
            p = self.damping,
            iterations = self.iterations,
            "running power iteration"
        );

        let transition = self.transition_matrix(graph);
        let mut current = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        for round in 0..self.iterations {
            for (v, value) in next.iter_mut().enumerate() {
                *value = current
                    .iter()
                    .zip(&transition)
                    .map(|(weight, row)| weight * row[v])
                    .sum();
            }
            std::mem::swap(&mut current, &mut next);

            trace!(round, mass = current.iter().sum::<f64>(), "power iteration round");
        }

        ranks[..n].copy_from_slice(&current);
    }

    /// Returns the ranks or `None` if the iteration is not applicable
    pub fn ranks<G: DirectedAdjacencyList>(&self, graph: &G) -> Option<Vec<f64>> {
        self.is_applicable(graph).then(|| {
            let mut ranks = vec![0.0; graph.len()];
            self.rank_into(graph, &mut ranks);
            ranks
        })
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::testing::random_multigraph;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn invalid_parameters_leave_buffer_untouched() {
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "A")]);

        for iteration in [
            PowerIteration::new().damping(0.0).iterations(10),
            PowerIteration::new().damping(1.5).iterations(10),
            PowerIteration::new().damping(0.5).iterations(0),
        ] {
            let mut ranks = [-1.0; 2];
            iteration.rank_into(&graph, &mut ranks);
            assert_eq!(ranks, [-1.0; 2]);
            assert!(iteration.ranks(&graph).is_none());
        }

        let mut ranks = [-1.0; 3];
        PowerIteration::new()
            .iterations(3)
            .rank_into(&MultiDigraph::new(), &mut ranks);
        assert_eq!(ranks, [-1.0; 3]);
    }

    #[test]
    fn transition_matrix_is_row_stochastic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 5, 20, 50] {
            for m in [n / 2, n, n * 5] {
                let mut graph = random_multigraph(rng, n, m);
                graph.add_node("dangling");

                for p in [0.01, 0.1, 0.5, 1.0] {
                    let matrix = PowerIteration::new().damping(p).transition_matrix(&graph);
                    assert_eq!(matrix.len(), graph.len());

                    for row in &matrix {
                        assert_eq!(row.len(), graph.len());
                        assert!(row.iter().all(|&x| x.is_valid_probility()));
                        assert!((row.iter().sum::<f64>() - 1.0).abs() < EPS);
                    }
                }
            }
        }
    }

    #[test]
    fn dangling_rows_ignore_damping() {
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("A", "B"), ("A", "C")]);
        let matrix = PowerIteration::new().damping(0.4).transition_matrix(&graph);

        let third = 1.0 / 3.0;
        assert_eq!(matrix[1], vec![third; 3]);
        assert_eq!(matrix[2], vec![third; 3]);

        let teleport = 0.4 * third;
        assert!((matrix[0][0] - teleport).abs() < EPS);
        assert!((matrix[0][1] - (teleport + 0.6 * 2.0 / 3.0)).abs() < EPS);
        assert!((matrix[0][2] - (teleport + 0.6 / 3.0)).abs() < EPS);
    }

    #[test]
    fn ranks_remain_a_distribution() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [1, 5, 20] {
            for m in [n / 2 + 1, n, n * 5] {
                let graph = random_multigraph(rng, n, m);

                for iterations in [1, 2, 10, 100] {
                    for p in [0.05, 0.5, 1.0] {
                        let ranks = PowerIteration::new()
                            .damping(p)
                            .iterations(iterations)
                            .ranks(&graph)
                            .unwrap();

                        assert!(ranks.iter().all(|&r| r >= 0.0));
                        assert!((ranks.iter().sum::<f64>() - 1.0).abs() < EPS);
                    }
                }
            }
        }
    }

    #[test]
    fn two_cycle_is_uniform() {
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "A")]);
        let ranks = PowerIteration::new()
            .damping(0.5)
            .iterations(200)
            .ranks(&graph)
            .unwrap();

        assert_eq!(format!("{:.10}", ranks[0]), "0.5000000000");
        assert_eq!(format!("{:.10}", ranks[1]), "0.5000000000");
    }

    #[test]
    fn full_damping_is_uniform() {
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("A", "C"), ("C", "C")]);
        let ranks = PowerIteration::new()
            .damping(1.0)
            .iterations(3)
            .ranks(&graph)
            .unwrap();

        assert!(ranks.iter().all(|r| (r - 1.0 / 3.0).abs() < EPS));
    }

    #[test]
    fn chain_into_sink() {
        // A -> B -> C, C dangling; C collects more mass than B, which collects more than A
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "C")]);
        let ranks = PowerIteration::new()
            .damping(0.1)
            .iterations(100)
            .ranks(&graph)
            .unwrap();

        assert!(ranks[0] < ranks[1]);
        assert!(ranks[1] < ranks[2]);
    }

    #[test]
    fn single_iteration_matches_manual_product() {
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("A", "A"), ("B", "A")]);
        let iteration = PowerIteration::new().damping(0.2).iterations(1);
        let matrix = iteration.transition_matrix(&graph);
        let ranks = iteration.ranks(&graph).unwrap();

        for v in 0..2 {
            let expected = 0.5 * matrix[0][v] + 0.5 * matrix[1][v];
            assert!((ranks[v] - expected).abs() < EPS);
        }
    }
}
