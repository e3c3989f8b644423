// src/report/totals.rs
// =============================================================================
// Summary counts over a set of link records.
//
// - total: number of records
// - ok:    records whose status is exactly "OK"
// - error: records whose status starts with "Erro"
//
// Unexpected codes and unreachable links count toward `total` only, so
// ok + error <= total always holds.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::checker::LinkRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotals {
    pub total: usize,
    pub ok: usize,
    pub error: usize,
}

impl StatusTotals {
    pub fn from_records(records: &[LinkRecord]) -> Self {
        StatusTotals {
            total: records.len(),
            ok: records.iter().filter(|r| r.is_ok()).count(),
            error: records.iter().filter(|r| r.is_error()).count(),
        }
    }

    /// Records that are neither OK nor an error
    pub fn other(&self) -> usize {
        self.total - self.ok - self.error
    }
}
