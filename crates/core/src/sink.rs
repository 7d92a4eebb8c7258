//! Graph sink interface: a write-only batched sink over an
//! opaque downstream store. The indexer only contracts for at-least-once
//! delivery and tolerates duplicate upserts; schema and transport are
//! outside this crate's scope.

use crate::model::SourceLocation;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BATCH_SIZE: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    Declares,
    Extends,
    Implements,
    Calls,
    Uses,
    HasParameter,
    Returns,
    AnnotatedWith,
    Contains,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub fqn: String,
    pub name: String,
    pub kind: crate::model::SymbolKind,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source_fqn: String,
    pub target_fqn: String,
    pub kind: EdgeKind,
    pub location: Option<SourceLocation>,
}

/// A batched node/edge sink. Implementations own their own transport; the
/// indexer never assumes a particular storage or retry semantics beyond
/// "at-least-once" and idempotent upsert.
pub trait GraphSink: Send + Sync {
    fn upsert_nodes(&mut self, batch: &[NodeRecord]) -> crate::error::Result<()>;
    fn upsert_edges(&mut self, batch: &[EdgeRecord]) -> crate::error::Result<()>;
}

/// A sink that discards everything it's given. Useful for dry runs and
/// tests that only care about the statistics record.
#[derive(Default)]
pub struct NullSink {
    pub nodes_written: usize,
    pub edges_written: usize,
}

impl GraphSink for NullSink {
    fn upsert_nodes(&mut self, batch: &[NodeRecord]) -> crate::error::Result<()> {
        self.nodes_written += batch.len();
        Ok(())
    }

    fn upsert_edges(&mut self, batch: &[EdgeRecord]) -> crate::error::Result<()> {
        self.edges_written += batch.len();
        Ok(())
    }
}

/// Splits a slice into sink batches of at most `batch_size` records each,
/// preserving order.
pub fn batches<T>(items: &[T], batch_size: usize) -> impl Iterator<Item = &[T]> {
    items.chunks(batch_size.max(1))
}
