//! Shared types for the reports feature

use ppr_common::checksum::sha256_bytes;
use ppr_report::RegionReport;
use serde::Serialize;
use uuid::Uuid;

/// Per-region summary returned after generation
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub region: String,
    pub filename: String,
    pub rows: usize,
    pub size_bytes: usize,
    pub checksum: String,
    pub download_url: String,
}

impl ReportSummary {
    /// Describe one stored regional report, with its download path
    pub fn describe(id: Uuid, report: &RegionReport) -> Self {
        Self {
            region: report.country.as_str().to_string(),
            filename: report.filename.to_string(),
            rows: report.rows,
            size_bytes: report.csv.len(),
            checksum: sha256_bytes(&report.csv),
            download_url: format!(
                "/api/v1/reports/{}/{}",
                id,
                report.country.as_str().to_lowercase()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppr_report::pipeline::generate_reports;

    #[test]
    fn test_describe_summarizes_a_report() {
        let bundle = generate_reports(b"site_post_code\nSW1A 1AA\n").unwrap();
        let id = Uuid::new_v4();
        let summary = ReportSummary::describe(id, &bundle.gb);

        assert_eq!(summary.region, "GB");
        assert_eq!(summary.filename, "Paddy Power GB Visits.csv");
        assert_eq!(summary.rows, 1);
        assert_eq!(summary.size_bytes, bundle.gb.csv.len());
        assert_eq!(summary.checksum, sha256_bytes(&bundle.gb.csv));
        assert_eq!(summary.download_url, format!("/api/v1/reports/{}/gb", id));
    }
}
