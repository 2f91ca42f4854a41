//! Xlsx workbook writer.
//!
//! Writes one sheet: header row, one data row per export row, the whole
//! region bound into a named table object with a fixed column width. The
//! file at the target path is overwritten.

use crate::error::ExportResult;
use crate::table::{ExportTable, HEADERS};
use rust_xlsxwriter::{Table, TableColumn, Workbook};
use std::path::Path;
use tracing::{info, warn};

/// Fixed width applied to every exported column.
const COLUMN_WIDTH: f64 = 12.0;

/// Writer for one worksheet of export rows.
pub struct WorkbookWriter {
    /// Sheet name, also used as the table object's name.
    sheet_name: String,
}

impl WorkbookWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    /// Write the table to `path`, overwriting any existing file.
    ///
    /// An xlsx table object needs at least one data row, so an empty table
    /// produces a header-only sheet without the table binding.
    pub fn write(&self, table: &ExportTable, path: impl AsRef<Path>) -> ExportResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }

        for (i, row) in table.rows().iter().enumerate() {
            let r = (i + 1) as u32;
            worksheet.write_number(r, 0, row.year as f64)?;
            worksheet.write_string(r, 1, row.date.as_str())?;
            worksheet.write_string(r, 2, row.historic_event.as_str())?;
        }

        for col in 0..HEADERS.len() as u16 {
            worksheet.set_column_width(col, COLUMN_WIDTH)?;
        }

        if table.is_empty() {
            warn!(sheet = %self.sheet_name, "No rows; writing header-only sheet without a table region");
        } else {
            let columns: Vec<TableColumn> = HEADERS
                .iter()
                .map(|header| TableColumn::new().set_header(*header))
                .collect();
            let table_object = Table::new()
                .set_name(self.sheet_name.as_str())
                .set_columns(&columns);
            worksheet.add_table(
                0,
                0,
                table.len() as u32,
                (HEADERS.len() - 1) as u16,
                &table_object,
            )?;
        }

        workbook.save(path)?;

        info!(
            sheet = %self.sheet_name,
            rows = table.len(),
            path = %path.display(),
            "Workbook written"
        );
        Ok(())
    }
}
