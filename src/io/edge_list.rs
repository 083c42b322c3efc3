/*!
# EdgeList Format

The EdgeList-Format consists of `m` non-comment-lines `u v` (or `u v w` in
the weighted variant), each representing a directed edge `Edge(u, v)`.
Nodes are 0-indexed; tokens are separated by whitespace; blank lines and
lines starting with the comment identifier are skipped.
*/

use std::{
    fmt::Display,
    io::{BufRead, ErrorKind, Result, Write},
};

use super::*;
use crate::{edge::*, node::*};

/// A reader for the EdgeList-Format.
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Whether each line carries a third weight token
    weighted: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            weighted: false,
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether a weight token is expected per line
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Parses all edges from the given reader.
    pub fn try_read_edges<D: DestId, R: BufRead>(&self, reader: R) -> Result<EdgeList<D>> {
        let mut el = EdgeList::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with(&self.comment_identifier) {
                continue;
            }

            let mut parts = line.split(' ').filter(|t| !t.is_empty());
            let from: Node = parse_next_value!(parts, "Source node");
            let dest: Node = parse_next_value!(parts, "Target node");

            let mut record = D::from_node(dest);
            if self.weighted {
                let weight: Weight = parse_next_value!(parts, "Edge weight");
                record = record.with_weight(weight);
            }
            el.push(Edge(from, record));
        }
        Ok(el)
    }
}

/// A writer for the EdgeList-Format.
///
/// Undirected graphs are written one line per edge (normalized direction
/// only); weighted records serialize as `u v w`.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the graph's edges to the given writer.
    pub fn try_write_graph<D, W>(&self, graph: &CsrGraph<D>, mut writer: W) -> Result<()>
    where
        D: DestId + Display,
        W: Write,
    {
        for u in 0..graph.num_nodes() {
            for &v in graph.out_neigh(u) {
                if !graph.directed() && v.node() < u {
                    continue;
                }
                writeln!(writer, "{} {}", u, v)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::builder::{BuildConfig, Builder, WeightedBuilder};

    use super::*;

    #[test]
    fn parses_unweighted_lines() {
        let input = "# a comment\n0 1\n1 2\n\n2 0\n";
        let el: EdgeList<Node> = EdgeListReader::new()
            .try_read_edges(input.as_bytes())
            .unwrap();
        assert_eq!(el, vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
    }

    #[test]
    fn parses_weighted_lines() {
        let input = "0 1 5\n1 2 3\n";
        let el: EdgeList<NodeWeight> = EdgeListReader::new()
            .weighted(true)
            .try_read_edges(input.as_bytes())
            .unwrap();
        assert_eq!(el, vec![(0, 1, 5).into(), (1, 2, 3).into()]);
    }

    #[test]
    fn rejects_truncated_lines() {
        let input = "0 1\n2\n";
        let parsed: Result<EdgeList<Node>> = EdgeListReader::new().try_read_edges(input.as_bytes());
        assert!(parsed.is_err());
    }

    #[test]
    fn rejects_garbage_tokens() {
        let input = "0 x\n";
        let parsed: Result<EdgeList<Node>> = EdgeListReader::new().try_read_edges(input.as_bytes());
        assert!(parsed.is_err());
    }

    #[test]
    fn write_read_round_trip() {
        let mut builder = Builder::new(BuildConfig::new().symmetrize(true));
        let graph =
            Builder::squish_graph(builder.from_edge_list(vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]));

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        let el: EdgeList<Node> = EdgeListReader::new()
            .try_read_edges(buffer.as_slice())
            .unwrap();
        let mut builder = Builder::new(BuildConfig::new().symmetrize(true));
        let reread = Builder::squish_graph(builder.from_edge_list(el));

        assert_eq!(graph.num_nodes(), reread.num_nodes());
        for u in 0..graph.num_nodes() {
            assert_eq!(graph.out_neigh(u), reread.out_neigh(u));
        }
    }

    #[test]
    fn weighted_write_read_round_trip() {
        let el: EdgeList<NodeWeight> = vec![(0, 1, 7).into(), (1, 2, 3).into()];
        let mut builder = WeightedBuilder::new(BuildConfig::new().symmetrize(true));
        builder.needs_weights = false;
        let graph = WeightedBuilder::squish_graph(builder.from_edge_list(el));

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        let el: EdgeList<NodeWeight> = EdgeListReader::new()
            .weighted(true)
            .try_read_edges(buffer.as_slice())
            .unwrap();
        assert_eq!(el, vec![(0, 1, 7).into(), (1, 2, 3).into()]);
    }
}
