use std::fs;

use sheetpull_engine::{check_destination_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn missing_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("not_there");
    assert!(check_destination_dir(&missing).is_err());
    // Probing must not create it either.
    assert!(!missing.exists());
}

#[test]
fn plain_file_is_rejected_as_a_destination() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("a_file");
    fs::write(&file_path, "x").unwrap();

    assert!(check_destination_dir(&file_path).is_err());

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("out.xlsx", b"data").is_err());
    assert!(!file_path.with_file_name("out.xlsx").exists());
}

#[test]
fn write_lands_under_the_requested_name() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let path = writer.write("out.xlsx", b"workbook bytes").unwrap();
    assert_eq!(path.file_name().unwrap(), "out.xlsx");
    assert_eq!(fs::read(&path).unwrap(), b"workbook bytes");
}
