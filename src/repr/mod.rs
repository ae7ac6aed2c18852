/*!
# Graph Representations

Currently there is a single backend, [`MultiDigraph`]: a named, directed multigraph stored
as a dense matrix of edge multiplicities. It is built once while a file is read and only
queried afterwards, see the [`ops`](crate::ops) traits for the available operations.
*/

use crate::{ops::*, *};

mod matrix;

pub use matrix::*;
