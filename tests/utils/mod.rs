use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};

/// sheet names of the workbook plus every row of its first sheet, cells rendered as text
pub fn read_workbook(
    path: &Path,
) -> Result<(Vec<String>, Vec<Vec<String>>), Box<dyn std::error::Error>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheets = workbook.sheet_names();
    let first = sheets.first().ok_or("workbook has no sheet")?;
    let range = workbook.worksheet_range(first)?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    Ok((sheets, rows))
}
