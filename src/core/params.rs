use serde::{Deserialize, Serialize};

use crate::core::discovery::{DiscoveryOptions, SHAPEFILE_EXTENSION};
use crate::types::ReportFormat;

/// Scan parameters suitable for config files and CLI defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanParams {
    /// File extension to collect, without the leading dot
    pub extension: String,
    /// Follow symbolic links while walking the tree
    pub follow_links: bool,
    /// Search the authority catalog when the CRS carries no embedded code
    pub full_scan: bool,
    pub format: ReportFormat,
}

impl ScanParams {
    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            extension: self.extension.clone(),
            follow_links: self.follow_links,
        }
    }
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            extension: SHAPEFILE_EXTENSION.to_string(),
            follow_links: false,
            full_scan: true,
            format: ReportFormat::Xml,
        }
    }
}
