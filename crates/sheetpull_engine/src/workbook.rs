use std::path::PathBuf;

use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;
use thiserror::Error;

use crate::filename::timestamped_filename;
use crate::parse::Table;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::types::WriteSummary;

/// Column widths are clamped here no matter how long the cells get.
pub const MAX_COLUMN_WIDTH: usize = 50;

const CELL_PADDING: usize = 2;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Destination(#[from] PersistError),
    #[error("workbook serialization failed: {0}")]
    Workbook(String),
}

/// Serializes a parsed table into a timestamp-named `.xlsx` workbook.
#[derive(Debug, Clone)]
pub struct WorkbookWriter {
    destination: PathBuf,
    file_prefix: String,
    sheet_name: String,
}

impl WorkbookWriter {
    pub fn new(destination: PathBuf, file_prefix: String, sheet_name: String) -> Self {
        Self {
            destination,
            file_prefix,
            sheet_name,
        }
    }

    /// Writes header plus data rows to a single named sheet, applies the
    /// computed column widths, and persists the workbook atomically.
    pub fn write(
        &self,
        table: &Table,
        stamp: &DateTime<Local>,
    ) -> Result<WriteSummary, WriteError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.sheet_name).map_err(map_xlsx_error)?;

        for (col, name) in table.columns.iter().enumerate() {
            sheet
                .write_string(0, col as u16, name)
                .map_err(map_xlsx_error)?;
        }
        for (row, cells) in table.rows.iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                sheet
                    .write_string(row as u32 + 1, col as u16, value)
                    .map_err(map_xlsx_error)?;
            }
        }
        for (col, width) in display_widths(table).into_iter().enumerate() {
            sheet
                .set_column_width(col as u16, width as f64)
                .map_err(map_xlsx_error)?;
        }

        let bytes = workbook.save_to_buffer().map_err(map_xlsx_error)?;

        let filename = timestamped_filename(&self.file_prefix, "xlsx", stamp);
        let writer = AtomicFileWriter::new(self.destination.clone());
        let path = writer.write(&filename, &bytes)?;

        Ok(WriteSummary {
            path,
            data_rows: table.rows.len(),
        })
    }
}

fn map_xlsx_error(err: rust_xlsxwriter::XlsxError) -> WriteError {
    WriteError::Workbook(err.to_string())
}

/// Display width per column: the longest cell in the column (the header
/// counts as a cell), padded, clamped. Pure over the table's text values.
pub fn display_widths(table: &Table) -> Vec<usize> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let mut longest = name.chars().count();
            for row in &table.rows {
                longest = longest.max(row[col].chars().count());
            }
            (longest + CELL_PADDING).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}
