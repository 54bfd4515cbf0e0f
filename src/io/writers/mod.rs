//! Report writers: XML (default) and JSON renderings of a [`Report`], plus the
//! file-level helper that overwrites the destination.
pub mod json;
pub mod xml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::report::Report;
use crate::error::Result;
use crate::types::ReportFormat;

/// Write `report` to `output`, replacing any existing file
pub fn write_report_to_path(report: &Report, output: &Path, format: ReportFormat) -> Result<()> {
    let file = BufWriter::new(File::create(output)?);
    let mut file = match format {
        ReportFormat::Xml => xml::write_xml(report, file)?,
        ReportFormat::Json => json::write_json(report, file)?,
    };
    file.flush()?;
    info!("Wrote {} entries to {:?} ({})", report.len(), output, format);
    Ok(())
}
