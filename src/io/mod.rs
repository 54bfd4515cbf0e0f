//! I/O layer: GDAL-backed shapefile CRS extraction, OSR identifier
//! resolution, and `writers` for the XML/JSON report.
pub mod osr;
pub use osr::GdalResolver;

pub mod shapefile;
pub use shapefile::{DeclaredCrs, ExtractError, read_declared_crs};

pub mod writers;
