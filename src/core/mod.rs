//! Core building blocks: file discovery, the identifier resolver seam, the
//! in-memory report model, and scan parameters. These are internal primitives
//! consumed by the high-level `api` module.
pub mod discovery;
pub mod params;
pub mod report;
pub mod resolver;
