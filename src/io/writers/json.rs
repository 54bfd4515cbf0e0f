//! JSON rendering of a scan report, for tooling that prefers it over XML.
use std::io::{Read, Write};

use crate::core::report::Report;
use crate::error::Result;

pub fn write_json<W: Write>(report: &Report, mut inner: W) -> Result<W> {
    serde_json::to_writer_pretty(&mut inner, report)?;
    inner.write_all(b"\n")?;
    Ok(inner)
}

pub fn read_json<R: Read>(source: R) -> Result<Report> {
    Ok(serde_json::from_reader(source)?)
}
