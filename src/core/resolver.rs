//! Seam between CRS extraction and the authority catalog used to identify it.
//!
//! Resolution is best-effort: callers that need a value for the report turn a
//! [`NoMatchFound`] into the `"Unknown"` placeholder via [`resolve_epsg_code`].
use thiserror::Error;
use tracing::debug;

use crate::types::Identifier;

#[derive(Debug, Clone, Error)]
#[error("No matching authority code: {reason}")]
pub struct NoMatchFound {
    pub reason: String,
}

impl NoMatchFound {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Maps a CRS definition (WKT) to a canonical authority identifier.
pub trait IdentifierResolver {
    /// With `full_scan` set, the resolver may search its whole catalog for an
    /// equivalent definition; otherwise only an identifier carried by the
    /// definition itself is accepted.
    fn resolve(&self, definition: &str, full_scan: bool) -> Result<Identifier, NoMatchFound>;
}

impl<F> IdentifierResolver for F
where
    F: Fn(&str, bool) -> Result<Identifier, NoMatchFound>,
{
    fn resolve(&self, definition: &str, full_scan: bool) -> Result<Identifier, NoMatchFound> {
        self(definition, full_scan)
    }
}

/// Resolve `definition` to a bare EPSG code. Non-EPSG identifiers and failures
/// both yield `None`.
pub fn resolve_epsg_code<R>(resolver: &R, definition: &str, full_scan: bool) -> Option<String>
where
    R: IdentifierResolver + ?Sized,
{
    match resolver.resolve(definition, full_scan) {
        Ok(id) if id.is_epsg() => Some(id.code),
        Ok(id) => {
            debug!("Ignoring non-EPSG identifier {}", id);
            None
        }
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}
