#![doc = r#"
shpcrs — inventory the coordinate reference systems of shapefiles.

This crate walks a directory tree, opens every shapefile it finds through GDAL,
reads the declared CRS (name and WKT), resolves an EPSG code where the PROJ
catalog knows an equivalent definition, and writes a consolidated XML report.
It powers the `shpcrs` CLI and can be embedded in your own Rust applications.

Requirements
------------
- GDAL development headers and runtime available on your system (with its PROJ
  database, used for EPSG identification).
- Rust 2024 edition toolchain.

Inspect one file
----------------
```rust,no_run
use std::path::Path;
use shpcrs::{inspect_file, GdalResolver};

fn main() -> shpcrs::Result<()> {
    let crs = inspect_file(Path::new("/data/roads.shp"), &GdalResolver::new(), true)?;
    println!("{} -> {}", crs.name, crs.epsg_or_unknown());
    Ok(())
}
```

Scan a tree into a report
-------------------------
```rust,no_run
use std::path::Path;
use shpcrs::{scan_directory_to_path, GdalResolver, ScanEvent, ScanParams};

fn main() -> shpcrs::Result<()> {
    let result = scan_directory_to_path(
        Path::new("/data"),
        Path::new("shapefile_crs_info.xml"),
        &ScanParams::default(),
        &GdalResolver::new(),
        |event| {
            if let ScanEvent::Processing { path } = event {
                println!("Processing: {}", path.display());
            }
        },
    )?;

    println!("extracted={} skipped={}", result.processed(), result.failed());
    Ok(())
}
```

Plugging in another catalog
---------------------------
EPSG lookup goes through the [`IdentifierResolver`] trait. Any
`Fn(&str, bool) -> Result<Identifier, NoMatchFound>` closure is a resolver, which
keeps tests independent of the PROJ database version.

```rust
use shpcrs::{Identifier, IdentifierResolver, NoMatchFound};

let fixed = |_wkt: &str, _full_scan: bool| -> Result<Identifier, NoMatchFound> {
    Ok(Identifier::new("EPSG", "4326"))
};
assert_eq!(fixed.resolve("GEOGCS[...]", true).unwrap().to_string(), "EPSG:4326");
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — discovery, resolver trait, report model, scan parameters.
- [`io`] — GDAL extraction, OSR resolver, report writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::ScanParams;
pub use crate::core::report::{Report, ReportEntry};
pub use crate::error::{Error, Result};
pub use crate::types::{CrsInfo, Identifier, ReportFormat, UNKNOWN_EPSG};

// Building blocks
pub use crate::core::discovery::{DiscoveryOptions, discover_files};
pub use crate::core::resolver::{IdentifierResolver, NoMatchFound, resolve_epsg_code};
pub use crate::io::osr::GdalResolver;
pub use crate::io::shapefile::{DeclaredCrs, ExtractError, read_declared_crs};
pub use crate::io::writers::write_report_to_path;
pub use crate::io::writers::xml::{read_xml, read_xml_file, write_xml};

// High-level API re-exports
pub use crate::api::{
    FileOutcome, ScanEvent, ScanResult, extract_crs, inspect_file, scan_directory,
    scan_directory_to_path,
};
