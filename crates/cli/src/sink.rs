//! The one concrete [`GraphSink`] this crate ships: appends
//! newline-delimited JSON node/edge records to a file, one record per line,
//! flushed after each batch the orchestrator hands it.

use codegraph_core::error::{CoreError, Result};
use codegraph_core::sink::{EdgeRecord, GraphSink, NodeRecord};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
#[serde(tag = "record")]
enum Line<'a> {
    #[serde(rename = "node")]
    Node(&'a NodeRecord),
    #[serde(rename = "edge")]
    Edge(&'a EdgeRecord),
}

/// Writes one JSON object per line to the output file, matching the
/// at-least-once, idempotent-upsert contract `GraphSink` asks for: a
/// downstream consumer replays the file and dedupes on `fqn` / edge identity.
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    fn write_line(&mut self, line: &Line) -> Result<()> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer
            .write_all(b"\n")
            .map_err(CoreError::Io)
    }
}

impl GraphSink for JsonlSink {
    fn upsert_nodes(&mut self, batch: &[NodeRecord]) -> Result<()> {
        for node in batch {
            self.write_line(&Line::Node(node))?;
        }
        self.writer.flush().map_err(CoreError::Io)
    }

    fn upsert_edges(&mut self, batch: &[EdgeRecord]) -> Result<()> {
        for edge in batch {
            self.write_line(&Line::Edge(edge))?;
        }
        self.writer.flush().map_err(CoreError::Io)
    }
}
