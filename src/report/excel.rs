// src/report/excel.rs
// =============================================================================
// Writes link records to an .xlsx file.
//
// Layout: a single worksheet, a bold header row (URL, Status) and one row
// per record, in the order the records were discovered.
//
// The file is overwritten on every call. There is no temp-file + rename
// step: a failure halfway through can leave a partial or missing file.
// =============================================================================

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::checker::LinkRecord;
use crate::error::ExportError;
use crate::observer::SharedObserver;

/// MIME type served for the export file
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const URL_COLUMN_WIDTH: f64 = 80.0;
const STATUS_COLUMN_WIDTH: f64 = 25.0;

#[derive(Clone)]
pub struct Exporter {
    path: PathBuf,
    observer: SharedObserver,
}

impl Exporter {
    pub fn new(path: impl Into<PathBuf>, observer: SharedObserver) -> Self {
        Exporter {
            path: path.into(),
            observer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, records: &[LinkRecord]) -> Result<(), ExportError> {
        write_workbook(&self.path, records).map_err(|source| ExportError {
            path: self.path.clone(),
            source,
        })?;

        self.observer.exported(&self.path, records.len());
        Ok(())
    }
}

fn write_workbook(path: &Path, records: &[LinkRecord]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.write_string_with_format(0, 0, "URL", &header)?;
    sheet.write_string_with_format(0, 1, "Status", &header)?;
    sheet.set_column_width(0, URL_COLUMN_WIDTH)?;
    sheet.set_column_width(1, STATUS_COLUMN_WIDTH)?;

    for (row, record) in (1u32..).zip(records) {
        sheet.write_string(row, 0, record.url.as_str())?;
        sheet.write_string(row, 1, record.status.label())?;
    }

    workbook.save(path)
}
