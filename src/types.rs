//! Shared types used across shpcrs.
//! Includes the per-file `CrsInfo` record, the resolved authority `Identifier`,
//! and the `ReportFormat` selector.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Placeholder written when no authority code could be resolved
pub const UNKNOWN_EPSG: &str = "Unknown";

/// CRS metadata extracted from one vector file
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CrsInfo {
    /// Display name of the CRS, as reported by the reference library
    pub name: String,
    /// Well-known-text serialization, verbatim
    pub wkt: String,
    /// Bare EPSG code (e.g. "4326"), `None` when resolution failed
    pub epsg_code: Option<String>,
}

impl CrsInfo {
    /// EPSG code, or `"Unknown"` when unresolved
    pub fn epsg_or_unknown(&self) -> &str {
        self.epsg_code.as_deref().unwrap_or(UNKNOWN_EPSG)
    }
}

/// An authority identifier such as `EPSG:4326`
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Identifier {
    pub authority: String,
    pub code: String,
}

impl Identifier {
    pub fn new(authority: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
            code: code.into(),
        }
    }

    pub fn is_epsg(&self) -> bool {
        self.authority.eq_ignore_ascii_case("EPSG")
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.authority, self.code)
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
pub enum ReportFormat {
    #[default]
    Xml,
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Xml => write!(f, "xml"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
