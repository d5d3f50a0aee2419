//! PPR Report - batch conversion tool

use anyhow::Result;
use clap::Parser;
use ppr_common::logging::{init_logging, LogConfig, LogLevel};
use ppr_report::pipeline;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ppr-report")]
#[command(author, version, about = "Regional visit report conversion tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Convert an audit export into the GB and IE visit reports
    Convert {
        /// Path to the audit export CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write the two report files into
        #[arg(short, long, default_value = "./reports")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Environment configuration first, then the verbose flag on top
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    log_config.log_file_prefix = "ppr-report".to_string();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }

    init_logging(&log_config)?;

    match cli.command {
        Command::Convert { input, output_dir } => {
            info!(input = %input.display(), "converting audit export");
            let bundle = pipeline::convert_file(&input, &output_dir)?;
            info!(
                input_rows = bundle.input_rows,
                gb_rows = bundle.gb.rows,
                ie_rows = bundle.ie.rows,
                output_dir = %output_dir.display(),
                "reports generated"
            );
        },
    }

    Ok(())
}
