/*!
# Serialized Graphs

Binary round-trip format for a finished [`CsrGraph`]: loading one skips the
whole construction pipeline.

Layout (all words little-endian `u64`):

```text
directed      : u8
has_inverse   : u8
num_nodes     : u64
out offsets   : (num_nodes + 1) words
out records   : offsets[num_nodes] packed records
inverse side  : same offsets + records layout, present iff has_inverse
```

Records are packed via [`DestId::pack`], so the `.sg` (unweighted) and
`.wsg` (weighted) variants share the same structure.
*/

use std::io::{ErrorKind, Read, Result, Write};

use super::*;
use crate::{
    node::{DestId, NumEdges},
    utils::SlicedBuffer,
};

/// Writes the graph in the serialized binary layout.
pub fn try_write_serialized<D: DestId, W: Write>(graph: &CsrGraph<D>, mut writer: W) -> Result<()> {
    writer.write_all(&[graph.directed() as u8, graph.in_adj().is_some() as u8])?;
    write_u64(&mut writer, graph.num_nodes() as u64)?;

    write_side(&mut writer, graph.out_adj())?;
    if let Some(inv) = graph.in_adj() {
        write_side(&mut writer, inv)?;
    }
    Ok(())
}

/// Reads a graph written by [`try_write_serialized`].
pub fn try_read_serialized<D: DestId, R: Read>(mut reader: R) -> Result<CsrGraph<D>> {
    let mut flags = [0u8; 2];
    reader.read_exact(&mut flags)?;
    let [directed, has_inverse] = flags;
    raise_error_unless!(
        directed <= 1 && has_inverse <= 1 && (directed == 1 || has_inverse == 0),
        ErrorKind::InvalidData,
        "Malformed serialized graph header"
    );
    let num_nodes = read_u64(&mut reader)?;

    let out = read_side(&mut reader, num_nodes)?;
    if directed == 1 {
        let inv = if has_inverse == 1 {
            Some(read_side(&mut reader, num_nodes)?)
        } else {
            None
        };
        Ok(CsrGraph::from_directed(out, inv))
    } else {
        Ok(CsrGraph::from_undirected(out))
    }
}

fn write_side<D: DestId, W: Write>(writer: &mut W, adj: &SlicedBuffer<D, NumEdges>) -> Result<()> {
    for &offset in adj.raw_offset_slice() {
        write_u64(writer, offset)?;
    }
    for &record in adj.raw_buffer_slice() {
        write_u64(writer, record.pack())?;
    }
    Ok(())
}

fn read_side<D: DestId, R: Read>(
    reader: &mut R,
    num_nodes: u64,
) -> Result<SlicedBuffer<D, NumEdges>> {
    let mut offsets = Vec::with_capacity(num_nodes as usize + 1);
    for _ in 0..=num_nodes {
        offsets.push(read_u64(reader)?);
    }
    raise_error_unless!(
        offsets.is_sorted(),
        ErrorKind::InvalidData,
        "Serialized offsets are not sorted"
    );

    let num_records = *offsets.last().unwrap();
    let mut records = Vec::with_capacity(num_records as usize);
    for _ in 0..num_records {
        records.push(D::unpack(read_u64(reader)?));
    }
    Ok(SlicedBuffer::new(records, offsets))
}

fn write_u64<W: Write>(writer: &mut W, word: u64) -> Result<()> {
    writer.write_all(&word.to_le_bytes())
}

fn read_u64<R: Read>(reader: &mut R) -> Result<u64> {
    let mut buffer = [0u8; 8];
    reader.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

#[cfg(test)]
mod test {
    use crate::{
        builder::{BuildConfig, Builder, WeightedBuilder},
        edge::{Edge, EdgeList},
        node::{Node, NodeWeight},
    };

    use super::*;

    fn assert_same_graph<D: DestId>(a: &CsrGraph<D>, b: &CsrGraph<D>) {
        assert_eq!(a.directed(), b.directed());
        assert_eq!(a.num_nodes(), b.num_nodes());
        assert_eq!(a.num_edges(), b.num_edges());
        for u in 0..a.num_nodes() {
            assert_eq!(a.out_neigh(u), b.out_neigh(u));
        }
    }

    #[test]
    fn undirected_round_trip() {
        let mut builder = Builder::new(BuildConfig::new().symmetrize(true));
        let graph =
            Builder::squish_graph(builder.from_edge_list(vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]));

        let mut buffer = Vec::new();
        try_write_serialized(&graph, &mut buffer).unwrap();
        let reread: CsrGraph<Node> = try_read_serialized(buffer.as_slice()).unwrap();
        assert_same_graph(&graph, &reread);
    }

    #[test]
    fn directed_round_trip_with_inverse() {
        let mut builder = Builder::new(BuildConfig::new());
        let graph =
            Builder::squish_graph(builder.from_edge_list(vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]));

        let mut buffer = Vec::new();
        try_write_serialized(&graph, &mut buffer).unwrap();
        let reread: CsrGraph<Node> = try_read_serialized(buffer.as_slice()).unwrap();
        assert_same_graph(&graph, &reread);
        for u in 0..graph.num_nodes() {
            assert_eq!(graph.in_neigh(u), reread.in_neigh(u));
        }
    }

    #[test]
    fn weighted_round_trip() {
        let el: EdgeList<NodeWeight> = vec![(0, 1, 7).into(), (1, 2, 300).into()];
        let mut builder = WeightedBuilder::new(BuildConfig::new().symmetrize(true));
        builder.needs_weights = false;
        let graph = WeightedBuilder::squish_graph(builder.from_edge_list(el));

        let mut buffer = Vec::new();
        try_write_serialized(&graph, &mut buffer).unwrap();
        let reread: CsrGraph<NodeWeight> = try_read_serialized(buffer.as_slice()).unwrap();
        assert_same_graph(&graph, &reread);
    }

    #[test]
    fn rejects_malformed_header() {
        let parsed: Result<CsrGraph<Node>> = try_read_serialized([7u8, 0].as_slice());
        assert!(parsed.is_err());
    }
}
