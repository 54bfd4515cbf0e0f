//! In-memory report accumulated during a scan. Serialization lives in
//! `io::writers`.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::CrsInfo;

/// One successfully inspected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub crs_name: String,
    pub crs_wkt: String,
    /// Bare EPSG code or `"Unknown"`
    pub epsg_code: String,
}

impl ReportEntry {
    pub fn new(path: &Path, crs: &CrsInfo) -> Self {
        Self {
            path: path.to_path_buf(),
            crs_name: crs.name.clone(),
            crs_wkt: crs.wkt.clone(),
            epsg_code: crs.epsg_or_unknown().to_string(),
        }
    }
}

/// Append-only collection of entries, in traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub files: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: &Path, crs: &CrsInfo) {
        self.files.push(ReportEntry::new(path, crs));
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
