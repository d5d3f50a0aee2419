use crate::store::ReportStore;
use ppr_report::Country;
use uuid::Uuid;

/// Fetch one stored regional report for download
#[derive(Debug, Clone)]
pub struct DownloadReportQuery {
    pub id: Uuid,
    pub region: String,
}

#[derive(Debug, Clone)]
pub struct DownloadReportResponse {
    pub filename: &'static str,
    pub content: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadReportError {
    #[error("Region must be 'gb' or 'ie'")]
    RegionInvalid,
    #[error("Report not found")]
    NotFound,
}

impl DownloadReportQuery {
    pub fn validate(&self) -> Result<Country, DownloadReportError> {
        self.region
            .parse::<Country>()
            .map_err(|_| DownloadReportError::RegionInvalid)
    }
}

#[tracing::instrument(skip(store), fields(id = %query.id, region = %query.region))]
pub async fn handle(
    store: ReportStore,
    query: DownloadReportQuery,
) -> Result<DownloadReportResponse, DownloadReportError> {
    let country = query.validate()?;

    let stored = store.get(query.id).ok_or(DownloadReportError::NotFound)?;
    let report = stored.bundle.report(country);

    tracing::debug!(
        filename = report.filename,
        size = report.csv.len(),
        "report download served"
    );

    Ok(DownloadReportResponse {
        filename: report.filename,
        content: report.csv.clone(),
    })
}
