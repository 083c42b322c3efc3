/*!
# Degree-Based Relabelling

Permutes vertex identifiers by non-increasing out-degree. On power-law
graphs this clusters the high-degree vertices at the front of the id space,
which improves locality for the analytics kernels consuming the graph.
*/

use std::{
    cmp::Reverse,
    sync::atomic::{AtomicU64, Ordering},
};

use rayon::prelude::*;

use crate::{
    node::*,
    repr::CsrGraph,
    utils::{par_prefix_sum, print_time, ScatterSlots, SlicedBuffer, Timer},
};

pub trait DegreeRelabel: Sized {
    /// Returns a copy of the graph where vertex ids are ranks in the
    /// descending-degree order, ties broken by ascending old id so the
    /// permutation is reproducible across runs.
    ///
    /// # Panics
    /// Panics if the graph is directed.
    fn relabel_by_degree(&self) -> Self;
}

impl<D: DestId> DegreeRelabel for CsrGraph<D> {
    fn relabel_by_degree(&self) -> Self {
        assert!(!self.directed(), "cannot relabel directed graph");

        let mut t = Timer::start();
        let num_nodes = self.num_nodes() as usize;

        let mut degree_id_pairs: Vec<(NumNodes, Node)> = vec![(0, 0); num_nodes];
        degree_id_pairs
            .par_iter_mut()
            .enumerate()
            .for_each(|(u, pair)| *pair = (self.out_degree(u as Node), u as Node));
        degree_id_pairs.par_sort_unstable_by_key(|&(deg, u)| (Reverse(deg), u));

        let degrees: Vec<NumNodes> = degree_id_pairs.par_iter().map(|&(deg, _)| deg).collect();
        let mut new_ids: Vec<Node> = vec![0; num_nodes];
        {
            let sink = ScatterSlots::new(&mut new_ids);
            degree_id_pairs
                .par_iter()
                .enumerate()
                // `old` ranges over a permutation of all ids, so the writes
                // are disjoint.
                .for_each(|(rank, &(_, old))| unsafe { sink.write(old as usize, rank as Node) });
        }

        let offsets = par_prefix_sum(&degrees);
        let total = offsets[num_nodes] as usize;
        let mut neighs = vec![D::default(); total];
        let slots: Vec<AtomicU64> = offsets.iter().map(|&o| AtomicU64::new(o)).collect();
        {
            let sink = ScatterSlots::new(&mut neighs);
            (0..num_nodes).into_par_iter().for_each(|u| {
                let new_u = new_ids[u] as usize;
                for &v in self.out_neigh(u as Node) {
                    let slot = slots[new_u].fetch_add(1, Ordering::Relaxed);
                    unsafe { sink.write(slot as usize, v.with_node(new_ids[v.node() as usize])) };
                }
            });
        }

        let mut adj = SlicedBuffer::new(neighs, offsets);
        adj.slices_mut()
            .into_par_iter()
            .for_each(|slice| slice.sort_unstable());

        t.stop();
        print_time("Relabel", t.seconds());
        CsrGraph::from_undirected(adj)
    }
}
