// File helper round trips and the Print export format

use formdeck::fileio::{export_text_in, read_lines, write_lines};

#[test]
fn test_read_write_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    std::fs::write(&first, "one\ntwo\n\nfour\n").unwrap();
    let lines = read_lines(&first).unwrap();
    assert_eq!(lines, vec!["one", "two", "", "four"]);

    write_lines(&lines.join("\n"), &second).unwrap();
    assert_eq!(read_lines(&second).unwrap(), lines);
}

#[test]
fn test_write_lines_terminates_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hi.txt");
    write_lines("hi", &path).unwrap();

    let sep = if cfg!(windows) { "\r\n" } else { "\n" };
    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, format!("hi{sep}"));
}

#[test]
fn test_write_lines_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("over.txt");
    write_lines("a long first version", &path).unwrap();
    write_lines("short", &path).unwrap();
    assert_eq!(read_lines(&path).unwrap(), vec!["short"]);
}

#[test]
fn test_read_lines_missing_file_is_an_error() {
    let err = read_lines("definitely/not/here.txt").unwrap_err();
    assert!(format!("{err:#}").contains("definitely/not/here.txt"));
}

#[test]
fn test_export_writes_title_txt() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_text_in(dir.path(), "Demo", "hi").unwrap();

    assert_eq!(path.file_name().unwrap(), "Demo.txt");
    let sep = if cfg!(windows) { "\r\n" } else { "\n" };
    assert_eq!(std::fs::read_to_string(&path).unwrap(), format!("hi{sep}"));
}

#[test]
fn test_export_empty_console_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_text_in(dir.path(), "Empty", "").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}
