use crate::features::reports::types::ReportSummary;
use crate::store::ReportStore;
use chrono::{DateTime, Utc};
use ppr_common::PprError;
use serde::Serialize;
use uuid::Uuid;

/// Upload one audit export and generate both regional reports
#[derive(Debug, Clone)]
pub struct GenerateReportsCommand {
    pub filename: Option<String>,
    pub content: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReportsResponse {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub input_rows: usize,
    pub gb: ReportSummary,
    pub ie: ReportSummary,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateReportsError {
    #[error("A CSV file part named 'file' is required")]
    FileRequired,
    #[error("Uploaded file is empty")]
    ContentRequired,
    #[error("Malformed multipart request: {0}")]
    Multipart(String),
    #[error("Uploaded file is not a usable audit export: {0}")]
    InvalidExport(String),
    #[error("Report generation failed: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PprError> for GenerateReportsError {
    fn from(err: PprError) -> Self {
        match err {
            PprError::MissingColumn(_) | PprError::Csv(_) | PprError::Parse(_) => {
                GenerateReportsError::InvalidExport(err.to_string())
            },
            other => GenerateReportsError::Internal(other.into()),
        }
    }
}

impl GenerateReportsCommand {
    pub fn validate(&self) -> Result<(), GenerateReportsError> {
        if self.content.is_empty() {
            return Err(GenerateReportsError::ContentRequired);
        }
        Ok(())
    }
}

#[tracing::instrument(skip(store, command), fields(filename = ?command.filename, size = command.content.len()))]
pub async fn handle(
    store: ReportStore,
    command: GenerateReportsCommand,
) -> Result<GenerateReportsResponse, GenerateReportsError> {
    command.validate()?;

    // The pipeline is synchronous CPU work; keep it off the runtime threads.
    let content = command.content;
    let bundle = tokio::task::spawn_blocking(move || ppr_report::pipeline::generate_reports(&content))
        .await
        .map_err(|e| GenerateReportsError::Internal(anyhow::anyhow!("pipeline task failed: {}", e)))??;

    let stored = store.insert(bundle);

    tracing::info!(
        id = %stored.id,
        input_rows = stored.bundle.input_rows,
        gb_rows = stored.bundle.gb.rows,
        ie_rows = stored.bundle.ie.rows,
        "reports generated"
    );

    Ok(GenerateReportsResponse {
        id: stored.id,
        generated_at: stored.generated_at,
        input_rows: stored.bundle.input_rows,
        gb: ReportSummary::describe(stored.id, &stored.bundle.gb),
        ie: ReportSummary::describe(stored.id, &stored.bundle.ie),
    })
}
