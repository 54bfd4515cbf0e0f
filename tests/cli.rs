mod common;

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

use common::{wgs84, write_corrupt, write_shapefile};

fn cmd() -> Command {
    Command::cargo_bin("shpcrs").unwrap()
}

#[test]
fn scan_reports_progress_and_skips_broken_files() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("a");
    write_shapefile(&root.join("x.shp"), Some(&wgs84()));
    write_corrupt(&root.join("b/y.shp"));
    let output = tmp.path().join("out.xml");

    cmd()
        .arg("scan")
        .arg(&root)
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Found 2 shapefiles"))
        .stdout(contains("Processing: "))
        .stdout(contains("Error processing: "))
        .stdout(contains("y.shp"))
        .stdout(contains("CRS information written to"));

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("x.shp"));
    assert!(!xml.contains("y.shp"));
    assert!(xml.contains("<EPSGCode>4326</EPSGCode>"));
    assert!(xml.contains(r#"<CRSWKT>GEOGCS["WGS 84""#));
}

#[test]
fn scan_defaults_write_into_working_directory() {
    let tmp = TempDir::new().unwrap();
    write_shapefile(&tmp.path().join("x.shp"), Some(&wgs84()));

    cmd()
        .current_dir(tmp.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(contains("Found 1 shapefiles"));

    assert!(tmp.path().join("shapefile_crs_info.xml").is_file());
}

#[test]
fn scan_fails_on_invalid_root() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("out.xml");

    cmd()
        .arg("scan")
        .arg(tmp.path().join("missing"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    assert!(!output.exists());
}

#[test]
fn scan_names_the_custom_extension() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("tabs");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("parcels.TAB"), b"not a table").unwrap();
    let output = tmp.path().join("out.xml");

    cmd()
        .args(["scan", "--extension", "tab"])
        .arg(&root)
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Found 1 .tab files"))
        .stdout(contains("Error processing: "));

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("<ShapefileCRSInfo/>"));
}

#[test]
fn scan_rejects_empty_extension() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["scan", "--extension", "."])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid extension"));
}

#[test]
fn inspect_prints_crs_and_epsg() {
    let tmp = TempDir::new().unwrap();
    let shp = write_shapefile(&tmp.path().join("roads.shp"), Some(&wgs84()));

    cmd()
        .arg("inspect")
        .arg(&shp)
        .assert()
        .success()
        .stdout(contains("CRS Name: "))
        .stdout(contains("CRS WKT:"))
        .stdout(contains("EPSG Code Detected: 4326"));
}

#[test]
fn inspect_without_crs_exits_cleanly() {
    let tmp = TempDir::new().unwrap();
    let shp = write_shapefile(&tmp.path().join("bare.shp"), None);

    cmd()
        .arg("inspect")
        .arg(&shp)
        .assert()
        .success()
        .stdout(contains("No CRS found for:"));
}

#[test]
fn inspect_fails_on_corrupt_file() {
    let tmp = TempDir::new().unwrap();
    let shp = write_corrupt(&tmp.path().join("broken.shp"));

    cmd()
        .arg("inspect")
        .arg(&shp)
        .assert()
        .failure()
        .stderr(contains("Failed to load shapefile"));
}

#[test]
fn inspect_fails_on_missing_file() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg("inspect")
        .arg(tmp.path().join("missing.shp"))
        .assert()
        .failure()
        .stderr(contains("file not found"));
}

#[test]
fn inspect_requires_a_path() {
    cmd()
        .arg("inspect")
        .assert()
        .failure()
        .stderr(contains("Missing required argument"));
}
