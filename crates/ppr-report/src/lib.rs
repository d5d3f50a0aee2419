//! PPR Report Library
//!
//! Turns one mystery-shopper audit export (`audits_basic_data_export.csv`)
//! into the two regional visit reports, `Paddy Power GB Visits.csv` and
//! `Paddy Power IE Visits.csv`.
//!
//! # Pipeline
//!
//! - **classify**: tag every record GB or IE from its site postcode
//! - **mapping**: the two static column projections (one per region)
//! - **report**: project, blank `Invalid date` sentinels, blank placeholder
//!   headers
//! - **pipeline**: the one-pass orchestration plus file output
//!
//! # Example
//!
//! ```no_run
//! use ppr_report::pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let bundle = pipeline::convert_file("audits_basic_data_export.csv", "./out")?;
//!     println!("GB rows: {}, IE rows: {}", bundle.gb.rows, bundle.ie.rows);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod mapping;
pub mod pipeline;
pub mod report;
pub mod table;

// Re-export commonly used types
pub use classify::Country;
pub use pipeline::{ReportBundle, RegionReport};
pub use table::Table;
