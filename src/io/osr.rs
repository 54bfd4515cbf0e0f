//! GDAL/OSR-backed identifier resolution.
//!
//! Definitions are re-imported from WKT, so lookups never borrow a dataset that
//! may already be closed.
use std::ffi::{CString, c_int};
use std::ptr;

use gdal::spatial_ref::SpatialRef;
use tracing::debug;

use crate::core::resolver::{IdentifierResolver, NoMatchFound};
use crate::types::Identifier;

/// OSRFindMatches confidence meaning "equivalent CRS, names differ"
pub const EQUIVALENT_CONFIDENCE: i32 = 70;

/// Authority whose codes the report records
pub const EPSG_AUTHORITY: &str = "EPSG";

/// Root authority (name, code) attached to a spatial reference
fn root_authority(srs: &SpatialRef) -> Option<Identifier> {
    let name = srs.auth_name()?;
    let code = srs.auth_code().ok()?;
    Some(Identifier::new(name, code.to_string()))
}

/// Catalog candidates for `wkt` with their confidence, in GDAL's order
fn find_matches(wkt: &str) -> Vec<(Identifier, i32)> {
    let Ok(c_wkt) = CString::new(wkt) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    unsafe {
        let handle = gdal_sys::OSRNewSpatialReference(c_wkt.as_ptr());
        if handle.is_null() {
            return found;
        }

        let mut count: c_int = 0;
        let mut confidences: *mut c_int = ptr::null_mut();
        let matches =
            gdal_sys::OSRFindMatches(handle, ptr::null_mut(), &mut count, &mut confidences);
        if !matches.is_null() {
            for i in 0..count.max(0) as usize {
                let confidence = if confidences.is_null() {
                    0
                } else {
                    *confidences.add(i)
                };
                // from_c_obj clones, the array keeps ownership of the original
                if let Ok(candidate) = SpatialRef::from_c_obj(*matches.add(i)) {
                    if let Some(id) = root_authority(&candidate) {
                        found.push((id, confidence));
                    }
                }
            }
            gdal_sys::OSRFreeSRSArray(matches);
        }
        gdal_sys::VSIFree(confidences.cast());
        gdal_sys::OSRRelease(handle);
    }
    found
}

/// Resolver backed by the PROJ database GDAL is linked against
#[derive(Debug, Clone)]
pub struct GdalResolver {
    /// Lowest `OSRFindMatches` confidence accepted during a full scan
    pub min_confidence: i32,
    /// Authority a full scan keeps searching for when the definition carries
    /// another one
    pub preferred_authority: String,
}

impl Default for GdalResolver {
    fn default() -> Self {
        Self {
            min_confidence: EQUIVALENT_CONFIDENCE,
            preferred_authority: EPSG_AUTHORITY.to_string(),
        }
    }
}

impl GdalResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_preferred(&self, id: &Identifier) -> bool {
        id.authority.eq_ignore_ascii_case(&self.preferred_authority)
    }

    /// Pick an identifier from the embedded authority and, on a full scan,
    /// catalog candidates. Preferred-authority matches win over confidence.
    fn select<F>(
        &self,
        embedded: Option<Identifier>,
        full_scan: bool,
        candidates: F,
    ) -> Result<Identifier, NoMatchFound>
    where
        F: FnOnce() -> Vec<(Identifier, i32)>,
    {
        if let Some(id) = embedded.as_ref().filter(|id| self.is_preferred(id)) {
            debug!("Using embedded authority {}", id);
            return Ok(id.clone());
        }
        if !full_scan {
            return embedded
                .ok_or_else(|| NoMatchFound::new("no authority code attached to definition"));
        }

        let mut best: Option<(Identifier, i32)> = None;
        let mut best_preferred: Option<(Identifier, i32)> = None;
        for (id, confidence) in candidates() {
            debug!("Candidate {} (confidence {})", id, confidence);
            if confidence < self.min_confidence {
                continue;
            }
            let slot = if self.is_preferred(&id) {
                &mut best_preferred
            } else {
                &mut best
            };
            if slot.as_ref().is_none_or(|(_, c)| confidence > *c) {
                *slot = Some((id, confidence));
            }
        }

        best_preferred
            .map(|(id, _)| id)
            .or(embedded)
            .or(best.map(|(id, _)| id))
            .ok_or_else(|| {
                NoMatchFound::new(format!(
                    "no catalog entry with confidence >= {}",
                    self.min_confidence
                ))
            })
    }
}

impl IdentifierResolver for GdalResolver {
    fn resolve(&self, definition: &str, full_scan: bool) -> Result<Identifier, NoMatchFound> {
        let srs = SpatialRef::from_wkt(definition)
            .map_err(|_| NoMatchFound::new("definition could not be parsed as WKT"))?;

        self.select(root_authority(&srs), full_scan, || find_matches(definition))
    }
}
