//! Integration tests for filesystem load and save
//!
//! Tests round trips, directory creation, trimming and error wrapping.

use std::error::Error as _;
use std::fs;

use commons::io::{
    ErrorKind, HEADER_COMMENT, Properties, SaveOptions, load_from_path, save, save_with,
};

use crate::init_tracing;

fn sample() -> Properties {
    [("a", "1"), ("b", "2")].into_iter().collect()
}

// =============================================================================
// Round Trip
// =============================================================================

#[test]
fn save_creates_directories_and_loads_back() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one/two/three/ip.properties");

    save(Some(&sample()), &path).unwrap();

    assert!(path.is_file());
    assert_eq!(load_from_path(&path).unwrap(), sample());
}

#[test]
fn header_is_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ip.properties");

    save(Some(&sample()), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let first = text.lines().next().unwrap();
    assert_eq!(first, format!("#{HEADER_COMMENT}"));
    assert_eq!(text, "#IP Configurations\na=1\nb=2\n");
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ip.properties");
    fs::write(&path, "stale=true\nmore=entries\n").unwrap();

    let props: Properties = [("fresh", "yes")].into_iter().collect();
    save(Some(&props), &path).unwrap();

    assert_eq!(load_from_path(&path).unwrap(), props);
}

#[test]
fn paths_are_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trim.properties");
    let padded = format!("  {}\t", path.display());

    save(Some(&sample()), &padded).unwrap();

    assert!(path.is_file());
    assert_eq!(load_from_path(&padded).unwrap(), sample());
}

#[test]
fn empty_properties_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.properties");

    save(Some(&Properties::new()), &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "#IP Configurations\n");
    assert!(load_from_path(&path).unwrap().is_empty());
}

#[test]
fn hand_written_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.properties");
    fs::write(
        &path,
        "# server settings\r\n\
         server.host : 192.168.0.10\r\n\
         server.ports = 80, \\\r\n\
         \x20              443\r\n\
         ! disabled\r\n\
         greeting=Gr\\u00fc\\u00dfe\r\n",
    )
    .unwrap();

    let props = load_from_path(&path).unwrap();

    assert_eq!(props.len(), 3);
    assert_eq!(props.get("server.host"), Some("192.168.0.10"));
    assert_eq!(props.get("server.ports"), Some("80, 443"));
    assert_eq!(props.get("greeting"), Some("Grüße"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_file_wraps_cause() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(dir.path().join("nope.properties")).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Open { .. }));
    assert!(err.source().is_some());
    assert!(!dir.path().join("nope.properties").exists());
}

#[test]
fn argument_errors() {
    assert_eq!(load_from_path("   ").unwrap_err().kind, ErrorKind::BlankPath);
    assert_eq!(save(Some(&sample()), "").unwrap_err().kind, ErrorKind::BlankPath);
    assert_eq!(
        save(None, "whatever.properties").unwrap_err().kind,
        ErrorKind::MissingProperties
    );
}

#[test]
fn directory_creation_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a plain file").unwrap();

    let err = save(Some(&sample()), blocker.join("sub/ip.properties")).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::CreateDirectory { .. }));
    assert!(err.io_error().is_some());
}

#[test]
fn opt_out_of_directory_creation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing/ip.properties");
    let options = SaveOptions {
        create_parent_dirs: false,
    };

    let err = save_with(Some(&sample()), &path, options).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Open { .. }));
    assert!(!dir.path().join("missing").exists());

    save_with(Some(&sample()), &path, SaveOptions::default()).unwrap();
    assert!(path.is_file());
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_is_serialize_error() {
    let err = save(Some(&sample()), "/dev/full").unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Serialize { .. }));
    assert!(err.io_error().is_some());
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn latin1_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.properties");
    fs::write(&path, b"# Z\xfcrich office\ncity=Z\xfcrich\nstreet=Bahnhofstra\xdfe\n").unwrap();

    let props = load_from_path(&path).unwrap();

    assert_eq!(props.get("city"), Some("Zürich"));
    assert_eq!(props.get("street"), Some("Bahnhofstraße"));
}
