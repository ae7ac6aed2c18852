/*!
# Node Representation

Nodes are `u32` ids in the range `0..n`, handed out in the order in which their names are
first seen. The id doubles as index into every per-node buffer an algorithm allocates, so
it must never change once assigned.
*/

use std::ops::Range;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Range over the node ids `0..n`
pub type NodeRange = Range<Node>;

/// Shorthand for converting a node id into a buffer index
#[inline]
pub(crate) const fn idx(u: Node) -> usize {
    u as usize
}
