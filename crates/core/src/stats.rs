//! The statistics record emitted after a full pipeline run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub files_found: usize,
    pub files_parsed: usize,
    pub parse_errors: usize,
    pub symbols_resolved: usize,
    pub resolved_calls: usize,
    pub unresolved_calls: usize,
    pub resolution_rate: f64,
    pub nodes_created: usize,
    pub relationships_created: usize,
}

impl Statistics {
    pub fn finalize(&mut self) {
        let total = self.resolved_calls + self.unresolved_calls;
        self.resolution_rate = if total == 0 {
            0.0
        } else {
            self.resolved_calls as f64 / total as f64
        };
    }
}

/// The user-visible terminal record: success flag, counts, and a
/// `hint` describing the most likely recovery action. A non-zero exit
/// status is reserved for the caller (`codegraph-cli`) on: no input path, no
/// supported files, or sink-connect failure — this crate only reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub success: bool,
    pub stats: Statistics,
    pub hint: Option<String>,
}

impl RunReport {
    pub fn ok(stats: Statistics) -> Self {
        Self {
            success: true,
            stats,
            hint: None,
        }
    }

    pub fn with_hint(stats: Statistics, hint: impl Into<String>) -> Self {
        Self {
            success: true,
            stats,
            hint: Some(hint.into()),
        }
    }

    pub fn failure(stats: Statistics, hint: impl Into<String>) -> Self {
        Self {
            success: false,
            stats,
            hint: Some(hint.into()),
        }
    }
}
