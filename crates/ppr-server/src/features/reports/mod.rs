pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use commands::{GenerateReportsCommand, GenerateReportsError, GenerateReportsResponse};

pub use queries::{DownloadReportError, DownloadReportQuery, DownloadReportResponse};

pub use routes::reports_routes;
