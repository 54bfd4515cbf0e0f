//! High-level library API: inspect a single shapefile, scan a directory tree into
//! a [`ScanResult`], or scan straight to a report file. Prefer these entrypoints
//! over the lower-level `core` and `io` modules when embedding shpcrs.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::discovery::discover_files;
use crate::core::params::ScanParams;
use crate::core::report::Report;
use crate::core::resolver::{IdentifierResolver, resolve_epsg_code};
use crate::error::{Error, Result};
use crate::io::shapefile::{ExtractError, read_declared_crs};
use crate::io::writers::write_report_to_path;
use crate::types::CrsInfo;

/// Outcome of processing one discovered file
#[derive(Debug)]
pub enum FileOutcome {
    Extracted { path: PathBuf, crs: CrsInfo },
    Failed(ExtractError),
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Extracted { path, .. } => path,
            FileOutcome::Failed(error) => error.path(),
        }
    }
}

/// Per-file outcomes of a scan, in traversal order
#[derive(Debug, Default)]
pub struct ScanResult {
    pub outcomes: Vec<FileOutcome>,
}

impl ScanResult {
    pub fn processed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Extracted { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.processed()
    }

    /// Report holding only the files whose CRS was extracted
    pub fn report(&self) -> Report {
        let mut report = Report::new();
        for outcome in &self.outcomes {
            if let FileOutcome::Extracted { path, crs } = outcome {
                report.push(path, crs);
            }
        }
        report
    }
}

/// Progress notifications emitted while scanning
#[derive(Debug, Clone, Copy)]
pub enum ScanEvent<'a> {
    Discovered { count: usize },
    Processing { path: &'a Path },
    Extracted { path: &'a Path, crs: &'a CrsInfo },
    Skipped { error: &'a ExtractError },
}

/// Read the CRS of one file and resolve its EPSG code (best-effort)
pub fn extract_crs<R>(
    path: &Path,
    resolver: &R,
    full_scan: bool,
) -> std::result::Result<CrsInfo, ExtractError>
where
    R: IdentifierResolver + ?Sized,
{
    let declared = read_declared_crs(path)?;
    let epsg_code = resolve_epsg_code(resolver, &declared.wkt, full_scan);
    Ok(CrsInfo {
        name: declared.name,
        wkt: declared.wkt,
        epsg_code,
    })
}

/// Single-file mode: the file must exist; open and CRS failures are returned
pub fn inspect_file<R>(path: &Path, resolver: &R, full_scan: bool) -> Result<CrsInfo>
where
    R: IdentifierResolver + ?Sized,
{
    if !path.is_file() {
        return Err(Error::invalid_input(path, "file not found"));
    }
    let path = path.canonicalize()?;
    Ok(extract_crs(&path, resolver, full_scan)?)
}

/// Discover every matching file under `root` and extract its CRS.
///
/// Only an invalid `root` fails the call; per-file errors are logged, reported
/// to `observer`, and recorded as [`FileOutcome::Failed`].
pub fn scan_directory<R, F>(
    root: &Path,
    params: &ScanParams,
    resolver: &R,
    mut observer: F,
) -> Result<ScanResult>
where
    R: IdentifierResolver + ?Sized,
    F: FnMut(ScanEvent<'_>),
{
    let files: Vec<PathBuf> = discover_files(root, &params.discovery_options())?.collect();
    info!("Found {} candidate files under {:?}", files.len(), root);
    observer(ScanEvent::Discovered { count: files.len() });

    let mut result = ScanResult::default();
    for path in files {
        observer(ScanEvent::Processing { path: &path });
        match extract_crs(&path, resolver, params.full_scan) {
            Ok(crs) => {
                observer(ScanEvent::Extracted {
                    path: &path,
                    crs: &crs,
                });
                result.outcomes.push(FileOutcome::Extracted { path, crs });
            }
            Err(error) => {
                warn!("{}", error);
                observer(ScanEvent::Skipped { error: &error });
                result.outcomes.push(FileOutcome::Failed(error));
            }
        }
    }

    info!(
        "Scan complete: {} extracted, {} skipped",
        result.processed(),
        result.failed()
    );
    Ok(result)
}

/// Scan `root` and write the report to `output`, overwriting it.
/// Nothing is written when `root` is invalid.
pub fn scan_directory_to_path<R, F>(
    root: &Path,
    output: &Path,
    params: &ScanParams,
    resolver: &R,
    observer: F,
) -> Result<ScanResult>
where
    R: IdentifierResolver + ?Sized,
    F: FnMut(ScanEvent<'_>),
{
    let result = scan_directory(root, params, resolver, observer)?;
    write_report_to_path(&result.report(), output, params.format)?;
    Ok(result)
}
