/*!
# IO

Utilities for reading and writing graphs from and to different file formats.

## Input Formats

- **EdgeList** (`.el` / `.wel`): one `u v` (or `u v w`) line per edge,
  0-indexed, whitespace separated, `#`-comment lines skipped.
- **Serialized** (`.sg` / `.wsg`): the binary layout of a finished
  [`CsrGraph`](crate::repr::CsrGraph); reading it bypasses the whole
  construction pipeline.

## Dispatch

[`GraphReader`] wraps a path and dispatches on its suffix, mirroring the
configuration surface of the pipeline: `read_file` parses text edge lists,
`read_serialized_graph` loads the binary format.
*/

pub mod edge_list;
pub mod serialized;

use std::{
    fs::File,
    io::{BufReader, ErrorKind, Result},
    path::{Path, PathBuf},
};

use crate::{edge::EdgeList, node::DestId, repr::CsrGraph};

pub use edge_list::{EdgeListReader, EdgeListWriter};
pub use serialized::{try_read_serialized, try_write_serialized};

/// Suffix-dispatching reader over a configured input path.
#[derive(Debug, Clone)]
pub struct GraphReader {
    path: PathBuf,
}

impl GraphReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// File suffix including the leading dot; empty when there is none.
    pub fn suffix(&self) -> String {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default()
    }

    /// Reads a text edge list.
    ///
    /// Clears `needs_weights` when the file itself provides weights, so the
    /// builder skips its weight-insertion pass.
    pub fn read_file<D: DestId>(&self, needs_weights: &mut bool) -> Result<EdgeList<D>> {
        let reader = BufReader::new(File::open(&self.path)?);
        match self.suffix().as_str() {
            ".el" => EdgeListReader::new().try_read_edges(reader),
            ".wel" => {
                raise_error_unless!(
                    D::HAS_WEIGHT,
                    ErrorKind::InvalidInput,
                    "weighted input requires a weighted graph type"
                );
                *needs_weights = false;
                EdgeListReader::new().weighted(true).try_read_edges(reader)
            }
            suffix => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown file format: {suffix:?}")
            )),
        }
    }

    /// Loads a serialized graph (`.sg` / `.wsg`).
    pub fn read_serialized_graph<D: DestId>(&self) -> Result<CsrGraph<D>> {
        let suffix = self.suffix();
        raise_error_unless!(
            matches!(suffix.as_str(), ".sg" | ".wsg"),
            ErrorKind::InvalidInput,
            format!("Not a serialized graph: {suffix:?}")
        );
        raise_error_unless!(
            (suffix == ".wsg") == D::HAS_WEIGHT,
            ErrorKind::InvalidInput,
            "serialized weight format does not match the graph type"
        );
        try_read_serialized(BufReader::new(File::open(&self.path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
