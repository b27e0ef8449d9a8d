use std::fs;
use std::path::Path;

use colmap_ingest::{HeaderMode, IngestError, PreviewOptions, read_preview};
use tempfile::tempdir;

fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write csv");
    path
}

#[test]
fn reads_header_and_caps_data_rows() {
    let dir = tempdir().expect("tempdir");
    let mut content = String::from("\u{feff}id, full name ,age\n");
    for i in 0..20 {
        content.push_str(&format!("{i},Person {i},{}\n", 20 + i));
    }
    let path = write_csv(dir.path(), "people.csv", &content);

    let preview = read_preview(&path, &PreviewOptions::default()).expect("read preview");

    assert_eq!(preview.file_name, "people.csv");
    assert!(preview.has_headers);
    assert_eq!(preview.rows.len(), 6);
    assert_eq!(preview.rows[0], vec!["id", "full name", "age"]);
    assert_eq!(preview.rows[5], vec!["4", "Person 4", "24"]);
}

#[test]
fn headerless_file_keeps_max_rows() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(dir.path(), "numbers.csv", "1,2\n3,4\n5,6\n7,8\n");

    let options = PreviewOptions::new().with_max_rows(3);
    let preview = read_preview(&path, &options).expect("read preview");

    assert!(!preview.has_headers);
    assert_eq!(preview.rows.len(), 3);
    assert_eq!(preview.rows[2], vec!["5", "6"]);
}

#[test]
fn header_mode_overrides_detection() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(dir.path(), "colors.csv", "red,green\nblue,cyan\n");

    let forced = read_preview(&path, &PreviewOptions::new().with_header(HeaderMode::Present))
        .expect("read preview");
    assert!(forced.has_headers);

    let path = write_csv(dir.path(), "scores.csv", "name,score\nann,3\n");
    let none = read_preview(&path, &PreviewOptions::new().with_header(HeaderMode::Absent))
        .expect("read preview");
    assert!(!none.has_headers);
    assert_eq!(none.rows.len(), 2);
}

#[test]
fn blank_rows_are_skipped_and_ragged_rows_kept() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(dir.path(), "ragged.csv", "a,b,c\n\n,,\n1,2\n3,4,5,6\n");

    let preview = read_preview(&path, &PreviewOptions::default()).expect("read preview");

    assert!(preview.has_headers);
    assert_eq!(preview.rows.len(), 3);
    assert_eq!(preview.column_count(), 4);
}

#[test]
fn empty_file_gives_empty_preview() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(dir.path(), "empty.csv", "");

    let preview = read_preview(&path, &PreviewOptions::default()).expect("read preview");

    assert!(!preview.has_headers);
    assert!(preview.rows.is_empty());
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let err = read_preview(&dir.path().join("absent.csv"), &PreviewOptions::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
