/*!
# Compressed Sparse Row (CSR) Graph

The read-optimized output of the construction pipeline.

A [`CsrGraph`] stores all adjacency lists in a single flattened buffer with
offset indices marking the start of each vertex's neighbor list. This provides:

- **Compact storage** compared to adjacency arrays (`Vec<Vec<Node>>`).
- **Fast sequential access** to neighbors due to good cache locality.
- **Higher construction cost**, but immutable and optimized for traversal.

A directed graph built with inversion additionally stores the transposed
(in-neighbor) side symmetrically. An undirected graph stores each edge twice
(once per endpoint) in its single out side, which then also serves in-neighbor
queries.
*/

use itertools::Itertools;

use crate::{node::*, utils::sliced_buffer::SlicedBuffer};

/// An immutable directed or undirected graph in CSR form.
///
/// The neighbor record type `D` is [`Node`] for unweighted graphs and
/// [`NodeWeight`] for weighted ones.
#[derive(Debug, Clone)]
pub struct CsrGraph<D = Node>
where
    D: DestId,
{
    directed: bool,
    num_edges: NumEdges,
    out: SlicedBuffer<D, NumEdges>,
    inv: Option<SlicedBuffer<D, NumEdges>>,
}

impl<D: DestId> CsrGraph<D> {
    /// Wraps a symmetric adjacency as an undirected graph.
    ///
    /// Every edge is expected to be stored once per endpoint, so the edge
    /// count is half the number of stored records.
    pub fn from_undirected(adj: SlicedBuffer<D, NumEdges>) -> Self {
        let num_edges = adj.number_of_entries() / 2;
        Self {
            directed: false,
            num_edges,
            out: adj,
            inv: None,
        }
    }

    /// Wraps an out-adjacency (and optionally its transpose) as a directed graph.
    pub fn from_directed(
        out: SlicedBuffer<D, NumEdges>,
        inv: Option<SlicedBuffer<D, NumEdges>>,
    ) -> Self {
        if let Some(inv) = &inv {
            assert_eq!(out.len(), inv.len());
            assert_eq!(out.number_of_entries(), inv.number_of_entries());
        }
        Self {
            directed: true,
            num_edges: out.number_of_entries(),
            out,
            inv,
        }
    }

    /// Returns `true` iff edges are oriented.
    #[inline]
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    #[inline]
    pub fn num_nodes(&self) -> NumNodes {
        self.out.len() as NumNodes
    }

    /// Number of edges; an undirected edge counts once.
    #[inline]
    pub fn num_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Number of directed edges; an undirected edge counts both ways.
    #[inline]
    pub fn num_edges_directed(&self) -> NumEdges {
        if self.directed {
            self.num_edges
        } else {
            2 * self.num_edges
        }
    }

    /// Out-degree of vertex `v`. **Panics if `v >= num_nodes()`.**
    #[inline]
    pub fn out_degree(&self, v: Node) -> NumNodes {
        self.out.size_of(v) as NumNodes
    }

    /// Out-neighbor records of vertex `v`. **Panics if `v >= num_nodes()`.**
    #[inline]
    pub fn out_neigh(&self, v: Node) -> &[D] {
        &self.out[v]
    }

    /// In-degree of vertex `v`.
    ///
    /// **Panics** for directed graphs built without inversion.
    #[inline]
    pub fn in_degree(&self, v: Node) -> NumNodes {
        self.in_side().size_of(v) as NumNodes
    }

    /// In-neighbor records of vertex `v`.
    ///
    /// **Panics** for directed graphs built without inversion.
    #[inline]
    pub fn in_neigh(&self, v: Node) -> &[D] {
        &self.in_side()[v]
    }

    /// Returns `true` if the transposed side can be queried.
    #[inline]
    pub fn has_in_side(&self) -> bool {
        !self.directed || self.inv.is_some()
    }

    /// Returns a sorted vector of `(degree, count)` pairs over out-degrees.
    pub fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = (0..self.num_nodes())
            .map(|v| self.out_degree(v))
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_unstable_by_key(|(d, _)| *d);
        distr
    }

    fn in_side(&self) -> &SlicedBuffer<D, NumEdges> {
        if self.directed {
            self.inv
                .as_ref()
                .expect("graph inversion disabled but reading inverse")
        } else {
            &self.out
        }
    }

    pub(crate) fn out_adj(&self) -> &SlicedBuffer<D, NumEdges> {
        &self.out
    }

    pub(crate) fn in_adj(&self) -> Option<&SlicedBuffer<D, NumEdges>> {
        self.inv.as_ref()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        bool,
        SlicedBuffer<D, NumEdges>,
        Option<SlicedBuffer<D, NumEdges>>,
    ) {
        (self.directed, self.out, self.inv)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn triangle() -> CsrGraph {
        // 0 - 1 - 2 - 0, stored symmetrically
        CsrGraph::from_undirected(SlicedBuffer::new(
            vec![1, 2, 0, 2, 0, 1],
            vec![0u64, 2, 4, 6],
        ))
    }

    #[test]
    fn undirected_counts() {
        let g = triangle();
        assert!(!g.directed());
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.num_edges_directed(), 6);
        assert_eq!(g.out_degree(1), 2);
        assert_eq!(g.out_neigh(1), &[0, 2]);
        // Undirected graphs answer in-queries from the out side.
        assert_eq!(g.in_neigh(1), &[0, 2]);
    }

    #[test]
    fn directed_with_inverse() {
        // 0 -> 1 -> 2
        let out = SlicedBuffer::new(vec![1, 2], vec![0u64, 1, 2, 2]);
        let inv = SlicedBuffer::new(vec![0, 1], vec![0u64, 0, 1, 2]);
        let g: CsrGraph = CsrGraph::from_directed(out, Some(inv));

        assert!(g.directed());
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.num_edges_directed(), 2);
        assert_eq!(g.out_neigh(0), &[1]);
        assert_eq!(g.in_neigh(2), &[1]);
        assert_eq!(g.in_degree(0), 0);
    }

    #[test]
    #[should_panic]
    fn missing_inverse_panics() {
        let out = SlicedBuffer::new(vec![1], vec![0u64, 1, 1]);
        let g: CsrGraph = CsrGraph::from_directed(out, None);
        g.in_degree(0);
    }

    #[test]
    fn degree_distribution() {
        let g = triangle();
        assert_eq!(g.degree_distribution(), vec![(2, 3)]);
    }
}
