//! All-string table model with CSV ingestion and BOM-prefixed CSV output
//!
//! The audit export and both reports are carried as text end to end: no type
//! coercion, no nulls. Short rows are padded with empty strings on read and
//! long rows truncated to the header width, so downstream code can index
//! cells by column position without bounds checks.

use ppr_common::Result;
use std::io::Read;
use std::path::Path;

/// UTF-8 byte-order marker expected by the spreadsheet tools that consume
/// the generated reports.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// An in-memory table of string cells with a header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given header row
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Create a table from a header row and data rows, normalizing every row
    /// to the header width
    pub fn with_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut table = Self::new(headers);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Parse a comma-delimited table from raw bytes. The first row is the
    /// header; every cell is kept as text and missing cells become empty
    /// strings.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Table> {
        Self::from_csv_reader(bytes)
    }

    /// Parse a comma-delimited table from any reader
    pub fn from_csv_reader<R: Read>(mut reader: R) -> Result<Table> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(data);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut table = Table::new(headers);
        for record in csv_reader.records() {
            let record = record?;
            table.push_row(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(table)
    }

    /// Parse a comma-delimited table from a file on disk
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Table> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Append a row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut [String] {
        &mut self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with the given header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Serialize as comma-delimited text with a header row, prefixed with a
    /// UTF-8 byte-order marker
    pub fn to_csv_bytes_with_bom(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(UTF8_BOM.len() + self.rows.len() * 64);
        buf.extend_from_slice(UTF8_BOM);

        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            writer.write_record(&self.headers)?;
            for row in &self.rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }

        Ok(buf)
    }
}
