use crate::api::response::{ApiResponse, ErrorResponse};
use crate::store::ReportStore;
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use super::{
    commands::{GenerateReportsCommand, GenerateReportsError},
    queries::{DownloadReportError, DownloadReportQuery},
};

pub fn reports_routes() -> Router<ReportStore> {
    Router::new()
        .route("/", post(generate_reports))
        .route("/:id/:region", get(download_report))
}

#[tracing::instrument(skip(store, multipart))]
async fn generate_reports(
    State(store): State<ReportStore>,
    mut multipart: Multipart,
) -> Result<Response, ReportApiError> {
    let mut filename: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GenerateReportsError::Multipart(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == "file" {
            filename = field.file_name().map(|s| s.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| GenerateReportsError::Multipart(e.to_string()))?;
            content = Some(data.to_vec());
        }
    }

    let content = content.ok_or(GenerateReportsError::FileRequired)?;

    let command = GenerateReportsCommand { filename, content };
    let response = super::commands::generate::handle(store, command).await?;

    tracing::info!(
        id = %response.id,
        input_rows = response.input_rows,
        "reports generated via API"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(store), fields(id = %id, region = %region))]
async fn download_report(
    State(store): State<ReportStore>,
    Path((id, region)): Path<(Uuid, String)>,
) -> Result<Response, ReportApiError> {
    let query = DownloadReportQuery { id, region };

    let response = super::queries::download::handle(store, query).await?;

    let disposition = format!("attachment; filename=\"{}\"", response.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        response.content,
    )
        .into_response())
}

#[derive(Debug)]
enum ReportApiError {
    Generate(GenerateReportsError),
    Download(DownloadReportError),
}

impl From<GenerateReportsError> for ReportApiError {
    fn from(err: GenerateReportsError) -> Self {
        Self::Generate(err)
    }
}

impl From<DownloadReportError> for ReportApiError {
    fn from(err: DownloadReportError) -> Self {
        Self::Download(err)
    }
}

impl IntoResponse for ReportApiError {
    fn into_response(self) -> Response {
        match self {
            ReportApiError::Generate(GenerateReportsError::FileRequired)
            | ReportApiError::Generate(GenerateReportsError::ContentRequired)
            | ReportApiError::Generate(GenerateReportsError::Multipart(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            ReportApiError::Generate(GenerateReportsError::InvalidExport(_)) => {
                let error = ErrorResponse::new("INVALID_EXPORT", self.to_string());
                (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
            },
            ReportApiError::Generate(GenerateReportsError::Internal(_)) => {
                tracing::error!("report generation failed: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "Report generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },

            ReportApiError::Download(DownloadReportError::RegionInvalid) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            ReportApiError::Download(DownloadReportError::NotFound) => {
                let error = ErrorResponse::new("NOT_FOUND", "Report not found");
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for ReportApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generate(e) => write!(f, "{}", e),
            Self::Download(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportApiError::Generate(GenerateReportsError::FileRequired);
        assert!(err.to_string().contains("file"));
    }

    #[test]
    fn test_routes_structure() {
        let router = reports_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
