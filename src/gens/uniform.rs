/*!
# Uniform Random Edge Lists

Every edge draws both endpoints independently and uniformly from
`0..2^scale`. Self-loops and duplicates are allowed; the squisher removes
them downstream.
*/

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rayon::prelude::*;

use super::*;
use crate::{edge::*, node::*};

/// Generator for uniform random edge lists.
#[derive(Debug, Copy, Clone)]
pub struct Uniform {
    scale: u32,
    edge_factor: u64,
}

impl Default for Uniform {
    fn default() -> Self {
        Self {
            scale: 0,
            edge_factor: DEFAULT_EDGE_FACTOR,
        }
    }
}

impl Uniform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScaleGen for Uniform {
    fn set_scale(&mut self, scale: u32) {
        self.scale = scale;
    }

    fn set_edge_factor(&mut self, edge_factor: u64) {
        self.edge_factor = edge_factor;
    }
}

impl EdgeListGenerator for Uniform {
    fn generate<R: Rng, D: DestId>(&self, rng: &mut R) -> EdgeList<D> {
        assert!(self.scale < Node::BITS, "scale exceeds the node id range");
        let num_nodes: u64 = 1 << self.scale;
        let num_edges = (self.edge_factor * num_nodes) as usize;
        let seed: u64 = rng.random();

        let mut el: EdgeList<D> = vec![Edge(0, D::from_node(0)); num_edges];
        el.par_chunks_mut(BLOCK_SIZE)
            .enumerate()
            .for_each(|(block, chunk)| {
                let rng = &mut Pcg64Mcg::seed_from_u64(seed.wrapping_add(block as u64));
                for e in chunk.iter_mut() {
                    let u = rng.random_range(0..num_nodes) as Node;
                    let v = rng.random_range(0..num_nodes) as Node;
                    *e = Edge(u, D::from_node(v));
                }
            });
        el
    }
}
