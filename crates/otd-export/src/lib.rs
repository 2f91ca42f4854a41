//! Tabular export for the on-this-day exporter.
//!
//! Flattens a parsed feed's `events` list into a three-column table and
//! writes it to disk as a formatted xlsx workbook.

pub mod error;
pub mod table;
pub mod writer;

pub use error::{ExportError, ExportResult};
pub use table::{ExportRow, ExportTable, HEADERS};
pub use writer::WorkbookWriter;
