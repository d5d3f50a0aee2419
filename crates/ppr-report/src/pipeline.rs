//! One-pass report generation: load, classify, partition, build, serialize
//!
//! Each uploaded export is processed independently in a single synchronous
//! pass; the only inputs are the bytes of one CSV file and the two static
//! field mappings.

use crate::classify::Country;
use crate::mapping::FieldMapping;
use crate::report::build_report;
use crate::table::Table;
use ppr_common::{PprError, Result};
use std::path::Path;
use tracing::{info, instrument};

/// Input column that drives country classification
pub const POSTCODE_COLUMN: &str = "site_post_code";

/// Fixed artifact name for the GB report
pub const GB_REPORT_FILENAME: &str = "Paddy Power GB Visits.csv";

/// Fixed artifact name for the IE report
pub const IE_REPORT_FILENAME: &str = "Paddy Power IE Visits.csv";

/// One serialized regional report
#[derive(Debug, Clone)]
pub struct RegionReport {
    pub country: Country,
    pub filename: &'static str,
    pub rows: usize,
    pub csv: Vec<u8>,
}

/// Both regional reports generated from one audit export
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub input_rows: usize,
    pub gb: RegionReport,
    pub ie: RegionReport,
}

impl ReportBundle {
    pub fn report(&self, country: Country) -> &RegionReport {
        match country {
            Country::Gb => &self.gb,
            Country::Ie => &self.ie,
        }
    }
}

/// Generate both regional reports from raw CSV bytes
pub fn generate_reports(input: &[u8]) -> Result<ReportBundle> {
    let table = Table::from_csv_bytes(input)?;
    generate_from_table(&table)
}

/// Generate both regional reports from an already parsed audit table
#[instrument(skip(table), fields(input_rows = table.row_count()))]
pub fn generate_from_table(table: &Table) -> Result<ReportBundle> {
    let postcode_idx = table
        .column_index(POSTCODE_COLUMN)
        .ok_or_else(|| PprError::MissingColumn(POSTCODE_COLUMN.to_string()))?;

    let mut gb_rows = Vec::new();
    let mut ie_rows = Vec::new();
    for row in table.rows() {
        match Country::from_postcode(&row[postcode_idx]) {
            Country::Gb => gb_rows.push(row.clone()),
            Country::Ie => ie_rows.push(row.clone()),
        }
    }

    info!(
        gb_rows = gb_rows.len(),
        ie_rows = ie_rows.len(),
        "classified audit rows"
    );

    let headers: Vec<String> = table.headers().to_vec();
    let gb = region_report(
        Table::with_rows(headers.clone(), gb_rows),
        Country::Gb.field_mapping(),
        GB_REPORT_FILENAME,
    )?;
    let ie = region_report(
        Table::with_rows(headers, ie_rows),
        Country::Ie.field_mapping(),
        IE_REPORT_FILENAME,
    )?;

    Ok(ReportBundle {
        input_rows: table.row_count(),
        gb,
        ie,
    })
}

fn region_report(
    subset: Table,
    mapping: &FieldMapping,
    filename: &'static str,
) -> Result<RegionReport> {
    let report = build_report(&subset, mapping);
    Ok(RegionReport {
        country: mapping.country,
        filename,
        rows: report.row_count(),
        csv: report.to_csv_bytes_with_bom()?,
    })
}

/// Write both reports of a bundle into a directory, creating it if needed
pub fn write_reports(bundle: &ReportBundle, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    for report in [&bundle.gb, &bundle.ie] {
        let path = dir.join(report.filename);
        std::fs::write(&path, &report.csv)?;
        info!(path = %path.display(), rows = report.rows, "report written");
    }

    Ok(())
}

/// Convert an audit export file on disk into the two report files
pub fn convert_file(input: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<ReportBundle> {
    let table = Table::from_csv_path(input)?;
    let bundle = generate_from_table(&table)?;
    write_reports(&bundle, output_dir)?;
    Ok(bundle)
}
