#[cfg(test)]
use rand::Rng;

#[cfg(test)]
use crate::{ops::*, repr::MultiDigraph};

/// Creates `m` random named edges between (at most) `n` distinct names `v0, v1, ...`.
/// Parallel edges and self-loops are intentionally not filtered.
#[cfg(test)]
pub(crate) fn random_named_edges<R: Rng>(rng: &mut R, n: u32, m: u32) -> Vec<(String, String)> {
    (0..m)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            (format!("v{u}"), format!("v{v}"))
        })
        .collect()
}

/// Creates a random multigraph from `m` random named edges over at most `n` names
#[cfg(test)]
pub(crate) fn random_multigraph<R: Rng>(rng: &mut R, n: u32, m: u32) -> MultiDigraph {
    let edges = random_named_edges(rng, n, m);
    MultiDigraph::from_named_edges(edges.iter().map(|(u, v)| (u.as_str(), v.as_str())))
}

/// Every graph should implement `GraphNew`, `GraphNodeEditing`, `GraphEdgeEditing` and
/// `DirectedAdjacencyList`; this macro checks them against a naive edge-count reference.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::{random_named_edges, test_graph_ops}, *};
            use fxhash::FxHashMap;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Reference model: names in first-seen order and a count per ordered pair of ids
            fn reference(edges: &[(String, String)]) -> (Vec<String>, FxHashMap<Edge, NumEdges>) {
                let mut names: Vec<String> = Vec::new();
                let mut counts = FxHashMap::default();

                fn id_of(names: &mut Vec<String>, name: &String) -> Node {
                    match names.iter().position(|x| x == name) {
                        Some(u) => u as Node,
                        None => {
                            names.push(name.clone());
                            (names.len() - 1) as Node
                        }
                    }
                }

                for (from, to) in edges {
                    let u = id_of(&mut names, from);
                    let v = id_of(&mut names, to);
                    *counts.entry(Edge(u, v)).or_insert(0) += 1;
                }

                (names, counts)
            }

            fn build(edges: &[(String, String)]) -> $graph {
                <$graph>::from_named_edges(edges.iter().map(|(u, v)| (u.as_str(), v.as_str())))
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();

            assert_eq!(graph.number_of_nodes(), 0);
            assert_eq!(graph.number_of_edges(), 0);
            assert!(graph.is_empty());
            assert!(graph.has_no_edges());
            assert_eq!(graph.vertices().count(), 0);
        }
    };
    ($graph:ident: GraphNodeEditing) => {
        #[test]
        fn test_graph_node_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1u32, 10, 50] {
                let mut graph = <$graph>::new();
                let mut names: Vec<String> = Vec::new();

                for _ in 0..(3 * n) {
                    let name = format!("v{}", rng.random_range(0..n));
                    let expected = match names.iter().position(|x| *x == name) {
                        Some(u) => u as Node,
                        None => {
                            names.push(name.clone());
                            (names.len() - 1) as Node
                        }
                    };

                    assert_eq!(graph.add_node(&name), expected);
                    assert_eq!(graph.number_of_nodes() as usize, names.len());
                }

                assert_eq!(graph.names().collect_vec(), names);
                assert!(graph.has_no_edges());
                for u in graph.vertices() {
                    assert_eq!(graph.id_of(graph.name_of(u)), Some(u));
                    assert_eq!(graph.out_degree_of(u), 0);
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5u32, 20, 50] {
                for m in [n, n * 5, n * 10] {
                    for _ in 0..5 {
                        let edges = random_named_edges(rng, n, m);
                        let (names, counts) = reference(&edges);
                        let graph = build(&edges);

                        assert_eq!(graph.number_of_nodes() as usize, names.len());
                        assert_eq!(graph.number_of_edges(), m);

                        for u in graph.vertices() {
                            for v in graph.vertices() {
                                let expected = counts.get(&Edge(u, v)).copied().unwrap_or(0);
                                assert_eq!(graph.multiplicity(u, v), expected);
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [5u32, 20, 50] {
                for m in [n, n * 5, n * 10] {
                    for _ in 0..5 {
                        let edges = random_named_edges(rng, n, m);
                        let (_, counts) = reference(&edges);
                        let graph = build(&edges);

                        for u in graph.vertices() {
                            let out: NumEdges = counts
                                .iter()
                                .filter(|(e, _)| e.0 == u)
                                .map(|(_, c)| *c)
                                .sum();
                            let inc: NumEdges = counts
                                .iter()
                                .filter(|(e, _)| e.1 == u)
                                .map(|(_, c)| *c)
                                .sum();
                            let targets = counts
                                .keys()
                                .filter(|e| e.0 == u)
                                .map(|e| e.1)
                                .sorted()
                                .collect_vec();

                            assert_eq!(graph.out_degree_of(u), out);
                            assert_eq!(graph.in_degree_of(u), inc);
                            assert_eq!(graph.is_dangling(u), out == 0);
                            assert_eq!(graph.out_neighbors_of(u).collect_vec(), targets);
                        }

                        assert_eq!(graph.out_degrees().sum::<NumEdges>(), m);
                        assert_eq!(graph.in_degrees().sum::<NumEdges>(), m);
                        assert_eq!(
                            graph.edges_with_multiplicity().map(|(_, c)| c).sum::<NumEdges>(),
                            m
                        );
                        assert!(graph
                            .edges_with_multiplicity()
                            .all(|(e, c)| counts[&e] == c));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
