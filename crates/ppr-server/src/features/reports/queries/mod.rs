pub mod download;

pub use download::{DownloadReportError, DownloadReportQuery, DownloadReportResponse};
