//! XML rendering of a scan report and the matching reader.
//!
//! Layout:
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <ShapefileCRSInfo>
//!   <Shapefile path="/data/roads.shp">
//!     <CRSName>WGS 84</CRSName>
//!     <CRSWKT>GEOGCS["WGS 84",...]</CRSWKT>
//!     <EPSGCode>4326</EPSGCode>
//!   </Shapefile>
//! </ShapefileCRSInfo>
//! ```
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::core::report::{Report, ReportEntry};
use crate::error::{Error, Result};

pub const ROOT_TAG: &str = "ShapefileCRSInfo";
pub const FILE_TAG: &str = "Shapefile";
pub const PATH_ATTR: &str = "path";
pub const NAME_TAG: &str = "CRSName";
pub const WKT_TAG: &str = "CRSWKT";
pub const EPSG_TAG: &str = "EPSGCode";

const INDENT: usize = 2;

/// Text content only needs `<`, `>` and `&` escaped; WKT quotes stay bare.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Serialize `report` into `inner` and hand the sink back
pub fn write_xml<W: Write>(report: &Report, inner: W) -> Result<W> {
    let mut writer = Writer::new_with_indent(inner, b' ', INDENT);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if report.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(ROOT_TAG)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
        for entry in report.entries() {
            let path = entry.path.to_string_lossy();
            let mut start = BytesStart::new(FILE_TAG);
            start.push_attribute((PATH_ATTR, path.as_ref()));
            writer.write_event(Event::Start(start))?;

            write_text_element(&mut writer, NAME_TAG, &entry.crs_name)?;
            write_text_element(&mut writer, WKT_TAG, &entry.crs_wkt)?;
            write_text_element(&mut writer, EPSG_TAG, &entry.epsg_code)?;

            writer.write_event(Event::End(BytesEnd::new(FILE_TAG)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;
    }

    let mut inner = writer.into_inner();
    inner.write_all(b"\n")?;
    Ok(inner)
}

fn entry_from_start(e: &BytesStart) -> Result<ReportEntry> {
    let mut path = None;
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == PATH_ATTR.as_bytes() {
            path = Some(attr.unescape_value()?.into_owned());
        }
    }
    let path = path.ok_or_else(|| {
        Error::MalformedReport(format!("<{}> without `{}` attribute", FILE_TAG, PATH_ATTR))
    })?;

    Ok(ReportEntry {
        path: PathBuf::from(path),
        crs_name: String::new(),
        crs_wkt: String::new(),
        epsg_code: String::new(),
    })
}

/// Parse a report previously produced by [`write_xml`]
pub fn read_xml<R: BufRead>(source: R) -> Result<Report> {
    let mut reader = Reader::from_reader(source);
    parse(&mut reader)
}

/// Parse the report stored at `path`
pub fn read_xml_file(path: &Path) -> Result<Report> {
    let mut reader = Reader::from_file(path)?;
    parse(&mut reader)
}

// Whitespace is significant inside leaf elements, so text is not trimmed;
// indentation between elements arrives while `curr` names no leaf tag.
fn parse<R: BufRead>(reader: &mut Reader<R>) -> Result<Report> {
    let mut buf = Vec::new();
    let mut report = Report::new();
    let mut current: Option<ReportEntry> = None;
    let mut curr = String::new();
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag.as_str() {
                    ROOT_TAG => seen_root = true,
                    FILE_TAG => current = Some(entry_from_start(e)?),
                    _ => {}
                }
                curr = tag;
            }
            Event::Empty(ref e) => match e.name().as_ref() {
                name if name == ROOT_TAG.as_bytes() => seen_root = true,
                name if name == FILE_TAG.as_bytes() => report.files.push(entry_from_start(e)?),
                _ => {}
            },
            Event::End(ref e) => {
                if e.name().as_ref() == FILE_TAG.as_bytes() {
                    if let Some(entry) = current.take() {
                        report.files.push(entry);
                    }
                }
                curr.clear();
            }
            Event::Text(e) => {
                let txt = e.unescape()?;
                if let Some(entry) = current.as_mut() {
                    match curr.as_str() {
                        NAME_TAG => entry.crs_name = txt.into_owned(),
                        WKT_TAG => entry.crs_wkt = txt.into_owned(),
                        EPSG_TAG => entry.epsg_code = txt.into_owned(),
                        _ => {}
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(Error::MalformedReport(format!("missing <{}> root", ROOT_TAG)));
    }
    Ok(report)
}
