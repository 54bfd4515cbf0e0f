#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use gdal::DriverManager;
use gdal::spatial_ref::SpatialRef;
use gdal::vector::LayerOptions;

/// Transverse Mercator with parameters no catalog entry shares
pub const CUSTOM_TMERC: &str = "+proj=tmerc +lat_0=12.345 +lon_0=-77.777 +k=0.9991 \
                                +x_0=123456 +y_0=0 +datum=WGS84 +units=m +no_defs";

/// Geographic WGS 84 without any AUTHORITY node
pub const WGS84_WITHOUT_AUTHORITY: &str = r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#;

pub fn wgs84() -> SpatialRef {
    SpatialRef::from_epsg(4326).unwrap()
}

pub fn custom_tmerc() -> SpatialRef {
    SpatialRef::from_proj4(CUSTOM_TMERC).unwrap()
}

/// Create an empty point shapefile at `path`, with a .prj when `srs` is given
pub fn write_shapefile(path: &Path, srs: Option<&SpatialRef>) -> PathBuf {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let driver = DriverManager::get_driver_by_name("ESRI Shapefile").unwrap();
    let mut dataset = driver.create_vector_only(path).unwrap();
    let name = path.file_stem().unwrap().to_str().unwrap();
    dataset
        .create_layer(LayerOptions {
            name,
            srs,
            ty: gdal_sys::OGRwkbGeometryType::wkbPoint,
            options: None,
        })
        .unwrap();
    path.canonicalize().unwrap()
}

/// Write bytes that no driver will accept as a shapefile
pub fn write_corrupt(path: &Path) -> PathBuf {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"this is not a shapefile").unwrap();
    path.canonicalize().unwrap()
}
