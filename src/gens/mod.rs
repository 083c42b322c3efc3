/*!
# Synthetic Edge-List Generators

Produces the raw edge lists consumed by the
[builder](crate::builder::GraphBuilder) when no input file is configured.

Two models are provided:
- [`Uniform`]: both endpoints of every edge drawn uniformly at random.
- [`Kronecker`]: the R-MAT recursive quadrant model, yielding the power-law
  degree distributions typical of real-world graphs.

Both are sized by a power-of-two **scale** (`2^scale` nodes) and an **edge
factor** (edges per node, default 16) via builder-style setters:

```
use parcsr::gens::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(42);
let el: parcsr::edge::EdgeList<parcsr::node::Node> =
    Uniform::new().scale(6).generate(rng);
assert_eq!(el.len(), 16 << 6);
```

Generation runs block-parallel with one independently seeded PCG stream per
block, so the output is a pure function of the configuration and the base
seed, regardless of thread count.
*/

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rayon::prelude::*;

use crate::{edge::*, node::*};

pub mod kronecker;
pub mod uniform;

pub use kronecker::Kronecker;
pub use uniform::Uniform;

/// Base seed of the deterministic streams used by generation and weight
/// insertion.
pub const RAND_SEED: u64 = 27491095;

/// Edges generated per node unless configured otherwise.
pub const DEFAULT_EDGE_FACTOR: u64 = 16;

/// Edges produced per independently seeded block.
pub(crate) const BLOCK_SIZE: usize = 1 << 18;

/// Trait for generators sized by a power-of-two scale.
pub trait ScaleGen: Sized {
    /// Sets the scale; the generator produces `2^scale` nodes (mutable setter).
    fn set_scale(&mut self, scale: u32);

    /// Sets the scale and returns the generator (builder style).
    fn scale(mut self, scale: u32) -> Self {
        self.set_scale(scale);
        self
    }

    /// Sets the number of edges per node (mutable setter).
    fn set_edge_factor(&mut self, edge_factor: u64);

    /// Sets the number of edges per node and returns the generator (builder style).
    fn edge_factor(mut self, edge_factor: u64) -> Self {
        self.set_edge_factor(edge_factor);
        self
    }
}

/// A configurable random edge-list producer.
pub trait EdgeListGenerator {
    /// Generates the full edge list.
    ///
    /// The passed rng only derives the base seed of the per-block streams;
    /// two calls with equal rng state produce identical lists.
    fn generate<R: Rng, D: DestId>(&self, rng: &mut R) -> EdgeList<D>;
}

/// Fills every record's weight with a uniform value in `1..=255`.
///
/// Weights come from per-block seeded streams, so each weight is a pure
/// function of its edge's index. A no-op for unweighted records.
pub fn insert_weights<D: DestId>(el: &mut EdgeList<D>) {
    el.par_chunks_mut(BLOCK_SIZE)
        .enumerate()
        .for_each(|(block, chunk)| {
            let rng = &mut Pcg64Mcg::seed_from_u64(RAND_SEED.wrapping_add(block as u64));
            for Edge(_, v) in chunk.iter_mut() {
                *v = v.with_weight(rng.random_range(1..256));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic() {
        let a: EdgeList<Node> =
            Uniform::new().scale(8).generate(&mut Pcg64Mcg::seed_from_u64(3));
        let b: EdgeList<Node> =
            Uniform::new().scale(8).generate(&mut Pcg64Mcg::seed_from_u64(3));
        assert_eq!(a, b);

        let a: EdgeList<Node> =
            Kronecker::new().scale(8).generate(&mut Pcg64Mcg::seed_from_u64(3));
        let b: EdgeList<Node> =
            Kronecker::new().scale(8).generate(&mut Pcg64Mcg::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn sizes_and_bounds() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        for scale in [0u32, 3, 10] {
            for edge_factor in [1u64, 16] {
                let el: EdgeList<Node> = Uniform::new()
                    .scale(scale)
                    .edge_factor(edge_factor)
                    .generate(rng);
                assert_eq!(el.len() as u64, edge_factor << scale);
                assert!(el.iter().all(|e| (e.source() as u64) < (1 << scale)
                    && (e.target() as u64) < (1 << scale)));

                let el: EdgeList<Node> = Kronecker::new()
                    .scale(scale)
                    .edge_factor(edge_factor)
                    .generate(rng);
                assert_eq!(el.len() as u64, edge_factor << scale);
                assert!(el.iter().all(|e| (e.source() as u64) < (1 << scale)
                    && (e.target() as u64) < (1 << scale)));
            }
        }
    }

    #[test]
    fn weight_insertion_is_deterministic_and_bounded() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let mut a: EdgeList<NodeWeight> = Uniform::new().scale(6).generate(rng);
        let mut b = a.clone();
        insert_weights(&mut a);
        insert_weights(&mut b);
        assert_eq!(a, b);
        assert!(a.iter().all(|e| (1..=255).contains(&e.1.weight)));
    }

    #[test]
    fn weight_insertion_ignores_unweighted_records() {
        let mut el: EdgeList<Node> = vec![Edge(0, 1), Edge(2, 3)];
        let before = el.clone();
        insert_weights(&mut el);
        assert_eq!(el, before);
    }
}
