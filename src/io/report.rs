use std::io::Write;

use crate::algo::DegreeStatistics;

use super::*;

/// Number of decimals printed per rank
pub const RANK_PRECISION: usize = 10;

/// Writes the statistics block
/// ```text
/// <id>:
/// - num nodes: <n>
/// - num edges: <e>
/// - indegree: <min>-<max>
/// - outdegree: <min>-<max>
/// ```
pub fn write_statistics<W: Write>(
    mut writer: W,
    id: &str,
    stats: &DegreeStatistics,
) -> Result<()> {
    writeln!(writer, "{id}:")?;
    writeln!(writer, "- num nodes: {}", stats.number_of_nodes)?;
    writeln!(writer, "- num edges: {}", stats.number_of_edges)?;
    writeln!(
        writer,
        "- indegree: {}-{}",
        stats.min_in_degree, stats.max_in_degree
    )?;
    writeln!(
        writer,
        "- outdegree: {}-{}",
        stats.min_out_degree, stats.max_out_degree
    )?;
    Ok(())
}

/// Writes one `<name> <rank>` line per node in insertion order.
///
/// A graph with a single node always reports `1.0000000000`, whatever `ranks` contains.
/// An empty graph writes nothing.
///
/// ** Panics if `ranks.len() < n` **
pub fn write_ranks<W, G>(mut writer: W, graph: &G, ranks: &[f64]) -> Result<()>
where
    W: Write,
    G: NodeLabels + GraphNodeOrder,
{
    if graph.number_of_nodes() == 1 {
        return writeln!(
            writer,
            "{} {:.precision$}",
            graph.name_of(0),
            1.0,
            precision = RANK_PRECISION
        );
    }

    for (name, rank) in graph.names().zip(&ranks[..graph.len()]) {
        writeln!(writer, "{name} {rank:.precision$}", precision = RANK_PRECISION)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::algo::GraphStatistics;

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn statistics_block() {
        let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "A")]);
        let stats = graph.degree_statistics();

        assert_eq!(
            render(|out| write_statistics(out, "G", &stats)),
            "G:\n- num nodes: 2\n- num edges: 2\n- indegree: 1-1\n- outdegree: 1-1\n"
        );
    }

    #[test]
    fn statistics_of_empty_graph() {
        let stats = MultiDigraph::new().degree_statistics();
        assert_eq!(
            render(|out| write_statistics(out, "none", &stats)),
            "none:\n- num nodes: 0\n- num edges: 0\n- indegree: 0-0\n- outdegree: 0-0\n"
        );
    }

    #[test]
    fn ranks_in_insertion_order() {
        let graph = MultiDigraph::from_named_edges([("B", "A"), ("A", "C")]);
        let ranks = [0.25, 0.5, 0.125];

        assert_eq!(
            render(|out| write_ranks(out, &graph, &ranks)),
            "B 0.2500000000\nA 0.5000000000\nC 0.1250000000\n"
        );
    }

    #[test]
    fn single_node_always_reports_one() {
        let graph = MultiDigraph::from_named_edges([("self", "self")]);

        for ranks in [[0.0], [0.3], [1.0]] {
            assert_eq!(
                render(|out| write_ranks(out, &graph, &ranks)),
                "self 1.0000000000\n"
            );
        }
    }

    #[test]
    fn empty_graph_writes_nothing() {
        assert_eq!(render(|out| write_ranks(out, &MultiDigraph::new(), &[])), "");
    }

    #[test]
    fn ranks_are_rounded_to_ten_decimals() {
        let graph = MultiDigraph::from_named_edges([("x", "y")]);
        let ranks = [1.0 / 3.0, 2.0 / 3.0];

        assert_eq!(
            render(|out| write_ranks(out, &graph, &ranks)),
            "x 0.3333333333\ny 0.6666666667\n"
        );
    }
}
