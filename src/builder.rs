/*!
# Edge-List to CSR Construction

Turns an unordered [`EdgeList`] into a [`CsrGraph`] in two bulk-parallel
passes:

1. **Degree counting**: one atomic fetch-and-add per edge endpoint.
2. **Scatter**: an exclusive prefix sum over the degrees yields each vertex's
   slice, and a second pass writes every neighbor record at a slot handed out
   by a fetch-and-add on a working copy of the offsets.

The order of records within a vertex's slice after scattering is
non-deterministic (whichever thread wins the counter); the
[squisher](GraphBuilder::squish_graph) canonicalizes it afterwards, so the
overall build is deterministic for a fixed input.

[`GraphBuilder::make_graph`] composes the full pipeline: obtain an edge list
from a file or a synthetic generator, build, squish, and report per-phase
wall times.
*/

use std::{
    marker::PhantomData,
    path::PathBuf,
    sync::atomic::{AtomicU32, AtomicU64, Ordering},
};

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use rayon::prelude::*;

use crate::{
    edge::*,
    gens::{insert_weights, EdgeListGenerator, Kronecker, ScaleGen, Uniform, RAND_SEED},
    io::GraphReader,
    node::*,
    repr::CsrGraph,
    utils::{par_prefix_sum, print_time, ScatterSlots, SlicedBuffer, Timer},
};

/// Pipeline configuration: where the edges come from and whether each input
/// edge is mirrored.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    pub(crate) filename: Option<PathBuf>,
    pub(crate) scale: Option<u32>,
    pub(crate) uniform: bool,
    pub(crate) symmetrize: bool,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input file to read edges from.
    pub fn set_filename<P: Into<PathBuf>>(&mut self, path: P) {
        self.filename = Some(path.into());
    }

    /// Sets the input file to read edges from (builder style).
    pub fn filename<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.set_filename(path);
        self
    }

    /// Sets the synthetic-graph scale (`2^scale` nodes); only used when no
    /// filename is configured.
    pub fn set_scale(&mut self, scale: u32) {
        self.scale = Some(scale);
    }

    /// Sets the synthetic-graph scale (builder style).
    pub fn scale(mut self, scale: u32) -> Self {
        self.set_scale(scale);
        self
    }

    /// Chooses the uniform generator instead of the Kronecker one.
    pub fn set_uniform(&mut self, uniform: bool) {
        self.uniform = uniform;
    }

    /// Chooses the uniform generator instead of the Kronecker one (builder style).
    pub fn uniform(mut self, uniform: bool) -> Self {
        self.set_uniform(uniform);
        self
    }

    /// Treats each input edge as both `(u,v)` and `(v,u)`, producing an
    /// undirected graph.
    pub fn set_symmetrize(&mut self, symmetrize: bool) {
        self.symmetrize = symmetrize;
    }

    /// Treats each input edge as both `(u,v)` and `(v,u)` (builder style).
    pub fn symmetrize(mut self, symmetrize: bool) -> Self {
        self.set_symmetrize(symmetrize);
        self
    }
}

/// Two-phase CSR builder over the neighbor record type `D`.
pub struct GraphBuilder<D: DestId = Node> {
    config: BuildConfig,
    invert: bool,
    pub(crate) needs_weights: bool,
    num_nodes: Option<NumNodes>,
    _dest: PhantomData<D>,
}

/// Builder for unweighted graphs.
pub type Builder = GraphBuilder<Node>;

/// Builder for weighted graphs.
pub type WeightedBuilder = GraphBuilder<NodeWeight>;

impl<D: DestId> GraphBuilder<D> {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            invert: true,
            needs_weights: D::HAS_WEIGHT,
            num_nodes: None,
            _dest: PhantomData,
        }
    }

    /// Whether a directed build also constructs the transposed (in-neighbor)
    /// side. Defaults to `true`; irrelevant when symmetrizing.
    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
    }

    /// See [`GraphBuilder::set_invert`] (builder style).
    pub fn invert(mut self, invert: bool) -> Self {
        self.set_invert(invert);
        self
    }

    /// Fixes the node count instead of deriving it from the largest endpoint.
    pub fn set_num_nodes(&mut self, num_nodes: NumNodes) {
        self.num_nodes = Some(num_nodes);
    }

    /// See [`GraphBuilder::set_num_nodes`] (builder style).
    pub fn num_nodes(mut self, num_nodes: NumNodes) -> Self {
        self.set_num_nodes(num_nodes);
        self
    }

    fn find_max_node(el: &[Edge<D>]) -> Option<Node> {
        el.par_iter().map(|e| e.0.max(e.1.node())).max()
    }

    fn count_degrees(&self, el: &[Edge<D>], num_nodes: NumNodes, transpose: bool) -> Vec<NumNodes> {
        let symmetrize = self.config.symmetrize;
        let degrees: Vec<AtomicU32> = (0..num_nodes).map(|_| AtomicU32::new(0)).collect();
        el.par_iter().for_each(|e| {
            if symmetrize || !transpose {
                degrees[e.0 as usize].fetch_add(1, Ordering::Relaxed);
            }
            if symmetrize || transpose {
                degrees[e.1.node() as usize].fetch_add(1, Ordering::Relaxed);
            }
        });
        degrees.into_iter().map(AtomicU32::into_inner).collect()
    }

    /// Builds one CSR side. The transposed side swaps endpoint roles and
    /// stores the source projection of each edge.
    fn make_csr(
        &self,
        el: &[Edge<D>],
        num_nodes: NumNodes,
        transpose: bool,
    ) -> SlicedBuffer<D, NumEdges> {
        let symmetrize = self.config.symmetrize;
        let degrees = self.count_degrees(el, num_nodes, transpose);
        let offsets = par_prefix_sum(&degrees);

        let total = usize::try_from(offsets[num_nodes as usize])
            .expect("edge count exceeds addressable memory");
        let mut neighs = vec![D::default(); total];

        // Scattering consumes a working copy of the offsets; the pristine
        // copy below becomes the index.
        let slots: Vec<AtomicU64> = offsets.iter().map(|&o| AtomicU64::new(o)).collect();
        {
            let sink = ScatterSlots::new(&mut neighs);
            el.par_iter().for_each(|&Edge(u, v)| {
                if symmetrize || !transpose {
                    let slot = slots[u as usize].fetch_add(1, Ordering::Relaxed);
                    unsafe { sink.write(slot as usize, v) };
                }
                if symmetrize || transpose {
                    let slot = slots[v.node() as usize].fetch_add(1, Ordering::Relaxed);
                    unsafe { sink.write(slot as usize, D::source_of(u, v)) };
                }
            });
        }

        SlicedBuffer::new(neighs, offsets)
    }

    /// Builds a raw (unsquished) graph from an edge list.
    ///
    /// Derives the node count from the largest endpoint unless one was fixed,
    /// and fills in deterministic weights if the record type carries weights
    /// the input did not provide.
    pub fn from_edge_list(&mut self, mut el: EdgeList<D>) -> CsrGraph<D> {
        let mut t = Timer::start();

        let num_nodes = self
            .num_nodes
            .unwrap_or_else(|| Self::find_max_node(&el).map_or(0, |max| max + 1));
        self.num_nodes = Some(num_nodes);

        if self.needs_weights {
            insert_weights(&mut el);
            self.needs_weights = false;
        }

        let out = self.make_csr(&el, num_nodes, false);
        let graph = if self.config.symmetrize {
            CsrGraph::from_undirected(out)
        } else {
            let inv = self.invert.then(|| self.make_csr(&el, num_nodes, true));
            CsrGraph::from_directed(out, inv)
        };

        t.stop();
        print_time("Build Time", t.seconds());
        graph
    }

    /// Canonicalizes a raw graph: every neighbor slice becomes strictly
    /// ascending in target, with duplicates and self-loops removed, on both
    /// sides if an in-side exists. Idempotent.
    ///
    /// For weighted records the kept duplicate is the one with the smallest
    /// weight (first after sorting).
    pub fn squish_graph(graph: CsrGraph<D>) -> CsrGraph<D> {
        let (directed, mut out, inv) = graph.into_parts();
        let sq_out = Self::squish_csr(&mut out);
        if directed {
            let sq_inv = inv.map(|mut adj| Self::squish_csr(&mut adj));
            CsrGraph::from_directed(sq_out, sq_inv)
        } else {
            CsrGraph::from_undirected(sq_out)
        }
    }

    fn squish_csr(adj: &mut SlicedBuffer<D, NumEdges>) -> SlicedBuffer<D, NumEdges> {
        let num_nodes = adj.len();
        let mut diffs: Vec<NumNodes> = vec![0; num_nodes];
        adj.slices_mut()
            .into_par_iter()
            .zip(diffs.par_iter_mut())
            .enumerate()
            .for_each(|(u, (slice, diff))| {
                *diff = squish_slice(slice, u as Node) as NumNodes;
            });

        let sq_offsets = par_prefix_sum(&diffs);
        let total = sq_offsets[num_nodes] as usize;
        let mut squished = SlicedBuffer::new(vec![D::default(); total], sq_offsets);
        squished
            .slices_mut()
            .into_par_iter()
            .enumerate()
            .for_each(|(u, dst)| dst.copy_from_slice(&adj[u][..dst.len()]));
        squished
    }

    /// Runs the full pipeline: obtain an edge list (file, generator, or
    /// nothing), build the raw CSR, squish it.
    ///
    /// Serialized-graph files (`.sg` / `.wsg`) bypass the pipeline entirely.
    pub fn make_graph(&mut self) -> std::io::Result<CsrGraph<D>> {
        let el = if let Some(path) = self.config.filename.clone() {
            let reader = GraphReader::new(&path);
            if matches!(reader.suffix().as_str(), ".sg" | ".wsg") {
                return reader.read_serialized_graph();
            }
            let mut t = Timer::start();
            let el = reader.read_file::<D>(&mut self.needs_weights)?;
            t.stop();
            print_time("Read Time", t.seconds());
            el
        } else if let Some(scale) = self.config.scale {
            let mut t = Timer::start();
            let rng = &mut Pcg64Mcg::seed_from_u64(RAND_SEED);
            let el = if self.config.uniform {
                Uniform::new().scale(scale).generate(rng)
            } else {
                Kronecker::new().scale(scale).generate(rng)
            };
            t.stop();
            print_time("Generate Time", t.seconds());
            el
        } else {
            EdgeList::new()
        };

        let graph = self.from_edge_list(el);

        let mut t = Timer::start();
        let graph = Self::squish_graph(graph);
        t.stop();
        print_time("Squish Time", t.seconds());
        Ok(graph)
    }
}

/// Canonicalizes one neighbor slice of vertex `u` in place and returns the
/// surviving length: sort ascending, keep the first record per target, drop
/// records targeting `u` itself.
fn squish_slice<D: DestId>(slice: &mut [D], u: Node) -> usize {
    slice.sort_unstable();
    let mut keep = 0;
    for i in 0..slice.len() {
        let record = slice[i];
        if record.node() == u {
            continue;
        }
        if keep > 0 && slice[keep - 1].node() == record.node() {
            continue;
        }
        slice[keep] = record;
        keep += 1;
    }
    keep
}
