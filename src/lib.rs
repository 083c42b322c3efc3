/*!
`parcsr` turns a stream of edges (read from disk or produced by a synthetic
generator) into a compact, read-optimized **Compressed Sparse Row** graph
for downstream analytics kernels (BFS, PageRank, connected components,
triangle counting, ...).

# Pipeline

1. Obtain an [`EdgeList`](edge::EdgeList) from the
   [reader](io::GraphReader), a [generator](gens), or the caller.
2. [Build](builder::GraphBuilder::from_edge_list) the raw CSR in two
   bulk-parallel passes: atomic degree counting, then a scatter whose slots
   are handed out by fetch-and-add over prefix-summed offsets.
3. [Squish](builder::GraphBuilder::squish_graph) the result: per-vertex
   sort, duplicate removal, self-loop removal.
4. Optionally [relabel by degree](algo::DegreeRelabel) to improve locality
   on power-law graphs.

All parallel loops are fork-join regions over rayon's thread pool; no
long-lived background threads exist, and the finished graph is immutable
and safe to share read-only.

# Usage

```
use parcsr::prelude::*;

let edges = vec![Edge(0, 1), Edge(1, 2), Edge(2, 0), Edge(1, 2)];
let mut builder = Builder::new(BuildConfig::new().symmetrize(true));
let graph = Builder::squish_graph(builder.from_edge_list(edges));

assert_eq!(graph.num_nodes(), 3);
assert_eq!(graph.num_edges(), 3);
assert_eq!(graph.out_neigh(0), &[1, 2]);
```

Weighted graphs run through the same pipeline with
[`NodeWeight`](node::NodeWeight) records; see
[`WeightedBuilder`](builder::WeightedBuilder).
*/

pub mod algo;
pub mod builder;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod repr;
pub mod utils;

/// `parcsr::prelude` includes the node/edge vocabulary, the builder and its
/// configuration, the CSR graph, and the relabeler.
pub mod prelude {
    pub use super::{algo::*, builder::*, edge::*, node::*, repr::*};
}
