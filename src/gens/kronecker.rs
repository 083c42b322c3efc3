/*!
# Kronecker (R-MAT) Edge Lists

The recursive quadrant model: each edge descends `scale` levels of a 2x2
partition of the adjacency matrix, choosing a quadrant per level with
probabilities `(A, B, C, 1 - A - B - C)`. With the classic
`A = 0.57, B = 0.19, C = 0.19` this yields the skewed, power-law degree
distributions typical of real-world graphs.
*/

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rayon::prelude::*;

use super::*;
use crate::{edge::*, node::*};

const A: f64 = 0.57;
const B: f64 = 0.19;
const C: f64 = 0.19;

/// Generator for R-MAT edge lists.
#[derive(Debug, Copy, Clone)]
pub struct Kronecker {
    scale: u32,
    edge_factor: u64,
}

impl Default for Kronecker {
    fn default() -> Self {
        Self {
            scale: 0,
            edge_factor: DEFAULT_EDGE_FACTOR,
        }
    }
}

impl Kronecker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScaleGen for Kronecker {
    fn set_scale(&mut self, scale: u32) {
        self.scale = scale;
    }

    fn set_edge_factor(&mut self, edge_factor: u64) {
        self.edge_factor = edge_factor;
    }
}

impl EdgeListGenerator for Kronecker {
    fn generate<R: Rng, D: DestId>(&self, rng: &mut R) -> EdgeList<D> {
        assert!(self.scale < Node::BITS, "scale exceeds the node id range");
        let num_nodes: u64 = 1 << self.scale;
        let num_edges = (self.edge_factor * num_nodes) as usize;
        let scale = self.scale;
        let seed: u64 = rng.random();

        let mut el: EdgeList<D> = vec![Edge(0, D::from_node(0)); num_edges];
        el.par_chunks_mut(BLOCK_SIZE)
            .enumerate()
            .for_each(|(block, chunk)| {
                let rng = &mut Pcg64Mcg::seed_from_u64(seed.wrapping_add(block as u64));
                for e in chunk.iter_mut() {
                    let (mut u, mut v) = (0u64, 0u64);
                    for _ in 0..scale {
                        u <<= 1;
                        v <<= 1;
                        let quadrant: f64 = rng.random();
                        if quadrant < A {
                        } else if quadrant < A + B {
                            v |= 1;
                        } else if quadrant < A + B + C {
                            u |= 1;
                        } else {
                            u |= 1;
                            v |= 1;
                        }
                    }
                    *e = Edge(u as Node, D::from_node(v as Node));
                }
            });
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skewed_towards_low_ids() {
        // With A > 1/4, quadrant 0 dominates, so low ids must collect more
        // than their uniform share of endpoints.
        let rng = &mut Pcg64Mcg::seed_from_u64(31);
        let el: EdgeList<Node> = Kronecker::new().scale(10).generate(rng);

        let lower_half = el
            .iter()
            .filter(|e| (e.source() as u64) < (1 << 9))
            .count();
        assert!(lower_half * 2 > el.len());
    }
}
