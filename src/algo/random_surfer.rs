use rand::Rng;
use tracing::debug;

use super::*;

/// Estimates ranks by simulating a random surfer.
///
/// Starting at a uniformly random node, the surfer performs `steps` moves. In each move it
/// teleports to a uniformly random node with probability `p` (and always if the current node
/// has no outgoing edges), otherwise it follows an outgoing link. The rank of a node is the
/// fraction of moves that ended in it.
///
/// ```rust
/// use dotrank::{prelude::*, algo::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "C"), ("C", "A")]);
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
///
/// let ranks = RandomSurfer::new().reset_probability(0.2).steps(1000).ranks(&graph, rng).unwrap();
/// assert_eq!(ranks.len(), 3);
/// assert!((ranks.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct RandomSurfer {
    reset_probability: f64,
    steps: u64,
}

impl Default for RandomSurfer {
    fn default() -> Self {
        Self {
            reset_probability: DEFAULT_RESET_PROBABILITY,
            steps: 0,
        }
    }
}

impl RandomSurfer {
    /// Creates a new surfer with `p = 0.1` and no steps
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the reset probability `p`. Values outside `(0, 1]` turn the surfer into a no-op.
    pub fn reset_probability(mut self, p: f64) -> Self {
        self.reset_probability = p;
        self
    }

    /// Updates the number of simulated moves. `0` turns the surfer into a no-op.
    pub fn steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Returns *true* if running the surfer on `graph` actually computes something
    pub fn is_applicable<G: GraphNodeOrder>(&self, graph: &G) -> bool {
        rank_preconditions_hold(graph, self.reset_probability, self.steps)
    }

    /// Simulates the surfer and returns how often each node was visited.
    /// The counts always sum up to `steps`.
    ///
    /// Returns `None` if the surfer is not applicable to `graph`.
    pub fn visit_counts<G, R>(&self, graph: &G, rng: &mut R) -> Option<Vec<u64>>
    where
        G: DirectedAdjacencyList,
        R: Rng,
    {
        if !self.is_applicable(graph) {
            return None;
        }

        let n = graph.number_of_nodes();
        let p = self.reset_probability;
        debug!(nodes = n, p, steps = self.steps, "simulating random surfer");

        let mut visits = vec![0u64; n as usize];
        let mut current = rng.random_range(0..n);

        for _ in 0..self.steps {
            let r: f64 = rng.random();
            if r < p || graph.is_dangling(current) || p == 1.0 {
                current = rng.random_range(0..n);
            } else {
                let k = rng.random_range(0..graph.out_degree_of(current));
                current = follow_link(graph, current, k);
            }

            visits[idx(current)] += 1;
        }

        Some(visits)
    }

    /// Writes the estimated rank `visits[u] / steps` of every node `u` into `ranks[u]`.
    /// If the surfer is not applicable, `ranks` is left untouched.
    ///
    /// ** Panics if `ranks.len() < n` **
    pub fn rank_into<G, R>(&self, graph: &G, rng: &mut R, ranks: &mut [f64])
    where
        G: DirectedAdjacencyList,
        R: Rng,
    {
        if let Some(visits) = self.visit_counts(graph, rng) {
            let steps = self.steps as f64;
            for (rank, visits) in ranks[..visits.len()].iter_mut().zip(visits) {
                *rank = visits as f64 / steps;
            }
        }
    }

    /// Returns the estimated ranks or `None` if the surfer is not applicable
    pub fn ranks<G, R>(&self, graph: &G, rng: &mut R) -> Option<Vec<f64>>
    where
        G: DirectedAdjacencyList,
        R: Rng,
    {
        self.is_applicable(graph).then(|| {
            let mut ranks = vec![0.0; graph.len()];
            self.rank_into(graph, rng, &mut ranks);
            ranks
        })
    }
}

/// Follows the `k`-th link out of `u`.
///
/// `k` is drawn from `0..out_degree(u)` which counts parallel edges, but links are enumerated
/// by *distinct* targets in increasing order. If `u` has at most `k` distinct targets, the
/// surfer stays at `u`.
pub fn follow_link<G: DirectedAdjacencyList>(graph: &G, u: Node, k: NumEdges) -> Node {
    graph.out_neighbors_of(u).nth(k as usize).unwrap_or(u)
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::testing::random_multigraph;

    use super::*;

    #[test]
    fn invalid_parameters_leave_buffer_untouched() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "A")]);

        for surfer in [
            RandomSurfer::new().reset_probability(0.0).steps(10),
            RandomSurfer::new().reset_probability(-0.5).steps(10),
            RandomSurfer::new().reset_probability(1.01).steps(10),
            RandomSurfer::new().reset_probability(0.5).steps(0),
        ] {
            let mut ranks = [42.0; 2];
            surfer.rank_into(&graph, rng, &mut ranks);
            assert_eq!(ranks, [42.0; 2]);
            assert!(surfer.visit_counts(&graph, rng).is_none());
        }

        let surfer = RandomSurfer::new().steps(10);
        let mut ranks = [42.0; 1];
        surfer.rank_into(&MultiDigraph::new(), rng, &mut ranks);
        assert_eq!(ranks, [42.0]);
        assert!(surfer.ranks(&MultiDigraph::new(), rng).is_none());
    }

    #[test]
    fn visits_sum_to_steps() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 5, 20] {
            for m in [n / 2, n, n * 4] {
                let mut graph = random_multigraph(rng, n, m);
                graph.add_node("isolated");

                for steps in [1, 7, 1000] {
                    for p in [0.01, 0.1, 0.5, 1.0] {
                        let surfer = RandomSurfer::new().reset_probability(p).steps(steps);
                        let visits = surfer.visit_counts(&graph, rng).unwrap();
                        assert_eq!(visits.len(), graph.len());
                        assert_eq!(visits.iter().sum::<u64>(), steps);

                        let ranks = surfer.ranks(&graph, rng).unwrap();
                        assert!(ranks.iter().all(|&r| r.is_valid_probility()));
                        assert!((ranks.iter().sum::<f64>() - 1.0).abs() < 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "C"), ("C", "A"), ("A", "C")]);
        let surfer = RandomSurfer::new().reset_probability(0.15).steps(500);

        let first = surfer.visit_counts(&graph, &mut Pcg64Mcg::seed_from_u64(7));
        let second = surfer.visit_counts(&graph, &mut Pcg64Mcg::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn follow_link_enumerates_distinct_targets() {
        let graph = MultiDigraph::from_named_edges([
            ("A", "D"),
            ("A", "B"),
            ("A", "B"),
            ("A", "B"),
            ("A", "C"),
        ]);
        let (a, b, c, d) = (0, 2, 3, 1);
        assert_eq!(graph.out_degree_of(a), 5);
        assert_eq!(graph.out_neighbors_of(a).collect_vec(), vec![d, b, c]);

        assert_eq!(follow_link(&graph, a, 0), d);
        assert_eq!(follow_link(&graph, a, 1), b);
        assert_eq!(follow_link(&graph, a, 2), c);
        // k = 3, 4 exceed the three distinct targets: the surfer stays put
        assert_eq!(follow_link(&graph, a, 3), a);
        assert_eq!(follow_link(&graph, a, 4), a);
    }

    #[test]
    fn parallel_edges_keep_surfer_in_place() {
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("A", "B"), ("A", "B")]);
        assert_eq!(graph.out_degree_of(0), 3);

        assert_eq!(follow_link(&graph, 0, 0), 1);
        assert_eq!(follow_link(&graph, 0, 1), 0);
        assert_eq!(follow_link(&graph, 0, 2), 0);
    }

    #[test]
    fn single_node_gets_every_visit() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut graph = MultiDigraph::new();
        graph.add_node("only");

        let surfer = RandomSurfer::new().reset_probability(0.3).steps(25);
        assert_eq!(surfer.visit_counts(&graph, rng), Some(vec![25]));
        assert_eq!(surfer.ranks(&graph, rng), Some(vec![1.0]));
    }

    #[test]
    fn sink_heavy_graph_ranks_sink_highest() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let graph = MultiDigraph::from_named_edges([
            ("a", "sink"),
            ("b", "sink"),
            ("c", "sink"),
            ("sink", "sink"),
        ]);

        let ranks = RandomSurfer::new()
            .reset_probability(0.1)
            .steps(20_000)
            .ranks(&graph, rng)
            .unwrap();

        let sink = graph.id_of("sink").unwrap();
        assert!(graph
            .vertices()
            .filter(|&u| u != sink)
            .all(|u| ranks[idx(u)] < ranks[idx(sink)]));
    }
}
