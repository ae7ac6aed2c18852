/*!
# IO

Reading graphs from the restricted DOT notation and writing the reports computed on them.

## Input Format

A subset of the [DOT language](https://graphviz.org/doc/info/lang.html) of GraphViz:
```text
digraph G {
A -> B;
B -> A;
}
```
See [`DotReader`] for the exact rules. A file either parses completely or not at all: no
partially read graph is ever returned.

## Output Formats

- [`write_statistics`]: the degree statistics block of a graph,
- [`write_ranks`]: one `<name> <rank>` line per node with 10 decimals.

## Traits

- [`GraphReader`] is implemented by readers for a specific format,
- [`DotRead`] is the shorthand to read with default settings.
*/

pub mod dot;
pub mod report;

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Result},
    path::Path,
};

use crate::prelude::*;

pub use dot::*;
pub use report::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
