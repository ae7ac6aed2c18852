//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/).
//! We only accept a small, line based subset of it:
//! ```text
//! digraph <identifier> {
//! <from> -> <to>;
//! ...
//! }
//! ```
//! - blank lines are ignored everywhere,
//! - the first non-blank line is the header, the identifier must start with an ASCII letter,
//! - every following line up to the closing `}` is a single edge; both names must start with an
//!   ASCII letter and must neither contain whitespace nor `;`,
//! - identifiers and names are limited to [`MAX_NAME_LENGTH`] bytes, lines to
//!   [`MAX_LINE_LENGTH`] bytes,
//! - nothing but blank lines may follow the closing brace.
//!
//! Repeated edges are kept as parallel edges. Nodes are numbered in the order in which their
//! names first appear.
//!
//! ```
//! use dotrank::{prelude::*, io::*};
//! use std::io::Cursor;
//!
//! let data = b"digraph G {\nA -> B;\nB -> A;\nA -> B;\n}\n";
//! let dot: DotGraph = DotReader::new().try_read_graph(Cursor::new(&data[..])).unwrap();
//!
//! assert_eq!(dot.id, "G");
//! assert_eq!(dot.graph.number_of_nodes(), 2);
//! assert_eq!(dot.graph.number_of_edges(), 3);
//! ```
use tracing::debug;

use super::*;

/// Maximum number of bytes of a single line (without line terminator)
pub const MAX_LINE_LENGTH: usize = 519;

/// Maximum number of bytes of the graph identifier and of every node name
pub const MAX_NAME_LENGTH: usize = 256;

/// A graph read from a Dot-File together with its identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotGraph<G = MultiDigraph> {
    /// Identifier given in the header line `digraph <id> {`
    pub id: String,
    /// The graph itself
    pub graph: G,
}

/// A GraphReader for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotReader {
    max_line_length: usize,
    max_name_length: usize,
}

impl Default for DotReader {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

/// Position of the reader within the file
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Section {
    Header,
    Edges,
    Closed,
}

impl DotReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the maximum number of bytes per line
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }

    /// Updates the maximum number of bytes of identifiers and names
    pub fn max_name_length(mut self, length: usize) -> Self {
        self.max_name_length = length;
        self
    }

    /// Checks that `name` starts with an ASCII letter, is not too long and contains neither
    /// whitespace nor `;`
    fn check_name(&self, name: &str, what: &str) -> Result<()> {
        raise_error_unless!(
            name.starts_with(|c: char| c.is_ascii_alphabetic()),
            ErrorKind::InvalidData,
            format!("{what} `{name}` does not start with an ASCII letter")
        );
        raise_error_unless!(
            name.len() <= self.max_name_length,
            ErrorKind::InvalidData,
            format!("{what} is longer than {} bytes", self.max_name_length)
        );
        raise_error_unless!(
            !name.contains(|c: char| c.is_whitespace() || c == ';'),
            ErrorKind::InvalidData,
            format!("{what} `{name}` contains whitespace or `;`")
        );
        Ok(())
    }

    /// Parses `digraph <id> {` and returns the identifier
    fn parse_header<'a>(&self, line: &'a str) -> Result<&'a str> {
        let rest = line
            .strip_prefix("digraph")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .ok_or_else(|| io_error!(ErrorKind::InvalidData, "Header must start with `digraph`"))?;

        let id = rest
            .strip_suffix('{')
            .ok_or_else(|| io_error!(ErrorKind::InvalidData, "Header must end with `{`"))?
            .trim();

        self.check_name(id, "Graph identifier")?;
        Ok(id)
    }

    /// Parses `<from> -> <to>;` and returns both names
    fn parse_edge<'a>(&self, line: &'a str) -> Result<(&'a str, &'a str)> {
        let statement = line
            .strip_suffix(';')
            .ok_or_else(|| io_error!(ErrorKind::InvalidData, "Edge must end with `;`"))?;

        let mut parts = statement.split_whitespace();
        let (Some(from), Some("->"), Some(to), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                "Edge must have the form `<from> -> <to>;`"
            ));
        };

        self.check_name(from, "Source node")?;
        self.check_name(to, "Target node")?;
        Ok((from, to))
    }
}

/// Attaches the (1-based) line number to an error
fn at_line(line: usize) -> impl FnOnce(std::io::Error) -> std::io::Error {
    move |err| io_error!(err.kind(), format!("Line {line}: {err}"))
}

impl<G> GraphReader<DotGraph<G>> for DotReader
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<DotGraph<G>> {
        let mut section = Section::Header;
        let mut id = String::new();
        let mut graph = G::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let number = number + 1;

            raise_error_unless!(
                line.len() <= self.max_line_length,
                ErrorKind::InvalidData,
                format!("Line {number} is longer than {} bytes", self.max_line_length)
            );

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match section {
                Section::Header => {
                    id = self.parse_header(line).map_err(at_line(number))?.to_string();
                    section = Section::Edges;
                }
                Section::Edges if line == "}" => section = Section::Closed,
                Section::Edges => {
                    let (from, to) = self.parse_edge(line).map_err(at_line(number))?;
                    graph.add_node(from);
                    graph.add_node(to);
                    graph.add_edge_by_name(from, to);
                }
                Section::Closed => {
                    return Err(io_error!(
                        ErrorKind::InvalidData,
                        format!("Line {number}: Unexpected content after closing `}}`")
                    ));
                }
            }
        }

        match section {
            Section::Header => Err(io_error!(ErrorKind::InvalidData, "Header not found")),
            Section::Edges => Err(io_error!(ErrorKind::InvalidData, "Missing closing `}`")),
            Section::Closed => {
                debug!(
                    id = id.as_str(),
                    nodes = graph.number_of_nodes(),
                    edges = graph.number_of_edges(),
                    "read dot graph"
                );
                Ok(DotGraph { id, graph })
            }
        }
    }
}

/// Trait for creating graphs from a DotReader.
/// Used as shorthand for default DotReader settings
pub trait DotRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_dot<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_dot_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_dot(BufReader::new(File::open(path)?))
    }
}

impl<G> DotRead for DotGraph<G>
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder,
{
    fn try_read_dot<R: BufRead>(reader: R) -> Result<Self> {
        DotReader::default().try_read_graph(reader)
    }
}
