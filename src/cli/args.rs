use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use shpcrs::ReportFormat;
use shpcrs::core::discovery::SHAPEFILE_EXTENSION;

/// Report file written by `scan` when no output path is given
pub const DEFAULT_OUTPUT: &str = "shapefile_crs_info.xml";

#[derive(Parser)]
#[command(name = "shpcrs", version, about = "Shapefile CRS inventory")]
pub struct CliArgs {
    /// Enable logging (to stderr; filter with RUST_LOG)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the CRS name, WKT and EPSG code of a single shapefile
    Inspect(InspectArgs),
    /// Recursively scan a directory and write a CRS report
    Scan(ScanArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Shapefile to inspect
    pub path: Option<PathBuf>,

    /// Only accept an EPSG code embedded in the definition (no catalog search)
    #[arg(long, default_value_t = false)]
    pub no_full_scan: bool,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Report file to write (overwritten if present)
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Report format (xml or json)
    #[arg(short = 'f', long, value_enum, default_value_t = ReportFormat::Xml)]
    pub format: ReportFormat,

    /// File extension to collect
    #[arg(long, default_value = SHAPEFILE_EXTENSION)]
    pub extension: String,

    /// Follow symbolic links while walking the tree
    #[arg(long, default_value_t = false)]
    pub follow_links: bool,

    /// Only accept EPSG codes embedded in the definition (no catalog search)
    #[arg(long, default_value_t = false)]
    pub no_full_scan: bool,
}
