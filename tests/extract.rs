mod common;

use shpcrs::{
    Error, ExtractError, GdalResolver, Identifier, IdentifierResolver, extract_crs, inspect_file,
    read_declared_crs,
};
use tempfile::TempDir;

use common::{WGS84_WITHOUT_AUTHORITY, custom_tmerc, wgs84, write_corrupt, write_shapefile};

#[test]
fn reads_declared_crs_of_a_shapefile() {
    let tmp = TempDir::new().unwrap();
    let shp = write_shapefile(&tmp.path().join("roads.shp"), Some(&wgs84()));

    let declared = read_declared_crs(&shp).unwrap();

    assert!(!declared.name.is_empty());
    assert!(declared.wkt.starts_with("GEOGCS["));
    assert!(declared.wkt.contains("WGS"));
}

#[test]
fn resolves_wgs84_to_epsg_4326() {
    let tmp = TempDir::new().unwrap();
    let shp = write_shapefile(&tmp.path().join("roads.shp"), Some(&wgs84()));

    let crs = extract_crs(&shp, &GdalResolver::new(), true).unwrap();

    assert_eq!(crs.epsg_code.as_deref(), Some("4326"));
    assert_eq!(crs.epsg_or_unknown(), "4326");
}

#[test]
fn unresolvable_crs_yields_unknown() {
    let tmp = TempDir::new().unwrap();
    let shp = write_shapefile(&tmp.path().join("custom.shp"), Some(&custom_tmerc()));

    let crs = extract_crs(&shp, &GdalResolver::new(), true).unwrap();

    assert!(crs.wkt.starts_with("PROJCS["));
    assert_eq!(crs.epsg_code, None);
    assert_eq!(crs.epsg_or_unknown(), "Unknown");
}

#[test]
fn missing_prj_is_no_crs() {
    let tmp = TempDir::new().unwrap();
    let shp = write_shapefile(&tmp.path().join("bare.shp"), None);

    let err = read_declared_crs(&shp).unwrap_err();

    assert!(matches!(err, ExtractError::NoCrs { .. }));
    assert_eq!(err.path(), shp.as_path());
}

#[test]
fn corrupt_file_is_open_error() {
    let tmp = TempDir::new().unwrap();
    let shp = write_corrupt(&tmp.path().join("broken.shp"));

    let err = read_declared_crs(&shp).unwrap_err();

    assert!(matches!(err, ExtractError::Open { .. }));
    assert_eq!(err.path(), shp.as_path());
}

#[test]
fn inspect_rejects_missing_file() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.shp");

    let err = inspect_file(&missing, &GdalResolver::new(), true).unwrap_err();

    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn inspect_surfaces_no_crs() {
    let tmp = TempDir::new().unwrap();
    let shp = write_shapefile(&tmp.path().join("bare.shp"), None);

    let err = inspect_file(&shp, &GdalResolver::new(), true).unwrap_err();

    assert!(matches!(err, Error::Extract(ExtractError::NoCrs { .. })));
}

#[test]
fn inspect_canonicalizes_the_path() {
    let tmp = TempDir::new().unwrap();
    write_shapefile(&tmp.path().join("bare.shp"), None);

    let err = inspect_file(&tmp.path().join(".").join("bare.shp"), &GdalResolver::new(), true)
        .unwrap_err();

    match err {
        Error::Extract(e) => {
            assert!(e.path().is_absolute());
            assert!(!e.path().components().any(|c| c.as_os_str() == "."));
            assert!(e.path().ends_with("bare.shp"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn resolver_uses_embedded_authority_without_full_scan() {
    let wkt = gdal::spatial_ref::SpatialRef::from_epsg(3857)
        .unwrap()
        .to_wkt()
        .unwrap();

    let id = GdalResolver::new().resolve(&wkt, false).unwrap();

    assert_eq!(id, Identifier::new("EPSG", "3857"));
}

#[test]
fn resolver_needs_full_scan_for_bare_definitions() {
    let resolver = GdalResolver::new();

    assert!(resolver.resolve(WGS84_WITHOUT_AUTHORITY, false).is_err());
    assert_eq!(
        resolver.resolve(WGS84_WITHOUT_AUTHORITY, true).unwrap(),
        Identifier::new("EPSG", "4326")
    );
}

#[test]
fn resolver_rejects_garbage() {
    assert!(GdalResolver::new().resolve("not wkt at all", true).is_err());
}
