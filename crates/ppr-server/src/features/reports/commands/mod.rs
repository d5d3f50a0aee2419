pub mod generate;

pub use generate::{GenerateReportsCommand, GenerateReportsError, GenerateReportsResponse};
