// src/report/mod.rs
// =============================================================================
// What happens to the records once every link has been probed:
// - totals: ok / error / total counts sent back to the client
// - excel: the downloadable spreadsheet
// =============================================================================

mod excel;
mod totals;

pub use excel::{Exporter, XLSX_CONTENT_TYPE};
pub use totals::StatusTotals;
