/*!
# Edge Representation

This module defines the representation of edges consumed by the construction pipeline.

- An `Edge(u, v)` consists of a source node `u` and a neighbor record `v`.
- The record type decides whether the edge carries a weight (see [`DestId`]).
- An [`EdgeList`] is an unordered sequence of edges; no uniqueness or ordering
  is assumed on input.
*/

use std::fmt::{Debug, Display};

use crate::node::*;

/// An edge from node `u` to the neighbor record `v`.
///
/// Whether the graph is directed is decided by the consumer; a symmetrizing
/// build treats `Edge(u, v)` and its reverse as the same undirected edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<D = Node>(pub Node, pub D);

/// An unordered sequence of edges, mutable during construction, then consumed.
pub type EdgeList<D> = Vec<Edge<D>>;

impl<D: DestId> Edge<D> {
    /// The source endpoint.
    #[inline(always)]
    pub fn source(&self) -> Node {
        self.0
    }

    /// The target endpoint (the record's target projection).
    #[inline(always)]
    pub fn target(&self) -> Node {
        self.1.node()
    }

    /// Returns `true` if the edge is a self-loop (`u == v`).
    #[inline(always)]
    pub fn is_loop(&self) -> bool {
        self.0 == self.1.node()
    }

    /// Returns the edge with endpoint roles swapped; any payload stays with the edge.
    #[inline(always)]
    pub fn reverse(&self) -> Self {
        Edge(self.1.node(), D::source_of(self.0, self.1))
    }

    /// Returns an edge where the smaller endpoint comes first.
    #[inline(always)]
    pub fn normalized(&self) -> Self {
        if self.0 <= self.1.node() {
            *self
        } else {
            self.reverse()
        }
    }
}

impl<D: DestId + Display> Display for Edge<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<D: DestId + Display> Debug for Edge<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge<Node> {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(Node, Node, Weight)> for Edge<NodeWeight> {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge(value.0, NodeWeight::new(value.1, value.2))
    }
}
