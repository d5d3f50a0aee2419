//! PPR Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared infrastructure for the PPR workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all PPR workspace
//! members:
//!
//! - **Error Handling**: the shared error type and result alias
//! - **Logging**: tracing subscriber configuration and initialization
//! - **Checksums**: integrity digests for generated report artifacts
//!
//! # Example
//!
//! ```no_run
//! use ppr_common::{PprError, Result};
//! use ppr_common::checksum::sha256_file;
//!
//! fn describe(path: &str) -> Result<()> {
//!     let checksum = sha256_file(path)?;
//!     tracing::info!(%checksum, "artifact written");
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{PprError, Result};
