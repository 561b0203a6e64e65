use super::*;

use std::fs::{self, create_dir_all, write};

use tally_runtime::BufferedWriter;

use crate::record::COLUMNS;

fn sample_tree() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("zero.bin"), b"").expect("write zero.bin");
    create_dir_all(root.join("docs").join("archive")).expect("create docs/archive");
    write(root.join("docs").join("readme.md"), vec![b'x'; 1536]).expect("write readme");
    write(root.join("docs").join("archive").join("old.log"), b"old").expect("write old.log");

    tmp
}

fn scan_to_string(root: &Path) -> (String, ScanSummary, BufferedWriter) {
    let mut status = BufferedWriter::new();
    let mut sink = CsvSink::from_writer(Vec::new(), true).expect("sink");
    let summary = scan_into(root, &mut sink, &mut status).expect("scan");
    let out = String::from_utf8(sink.finish().expect("finish")).expect("utf8");
    (out, summary, status)
}

fn parse(out: &str) -> Vec<csv::StringRecord> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(out.as_bytes())
        .records()
        .collect::<Result<_, _>>()
        .expect("parse output")
}

#[test]
fn one_row_per_regular_file() {
    let tmp = sample_tree();
    let (out, summary, status) = scan_to_string(tmp.path());
    let rows = parse(&out);

    assert_eq!(rows.len(), 3);
    assert_eq!(summary.files, 3);
    assert_eq!(summary.directories, 2);
    assert_eq!(status.lines().len(), 3);
    assert!(rows.iter().all(|r| r.len() == COLUMNS.len()));
    assert!(rows.iter().all(|r| &r[7] == "file"));
}

#[test]
fn rows_carry_derived_fields() {
    let tmp = sample_tree();
    let (out, _, _) = scan_to_string(tmp.path());
    let rows = parse(&out);

    let readme = rows
        .iter()
        .find(|r| &r[0] == "readme.md")
        .expect("readme row");
    let expected_path = std::path::absolute(tmp.path().join("docs").join("readme.md"))
        .expect("absolute");

    assert_eq!(&readme[1], expected_path.to_string_lossy());
    assert_eq!(&readme[6], "1.5KB");
    assert_eq!(&readme[14], "1536");
    assert_eq!(readme[2].len(), "YYYY-MM-DD".len());
    assert_eq!(readme[5].len(), "YYYY-MM-DD HH:MM:SS".len());

    let zero = rows.iter().find(|r| &r[0] == "zero.bin").expect("zero row");
    assert_eq!(&zero[6], "0B");
}

#[test]
fn fresh_scans_are_idempotent() {
    let tmp = sample_tree();
    let (first, _, _) = scan_to_string(tmp.path());
    let (second, _, _) = scan_to_string(tmp.path());

    assert_eq!(first, second);
}

#[test]
fn fresh_then_append_sums_rows_under_one_header() {
    let tmp = sample_tree();
    let out_dir = tempfile::tempdir().expect("output dir");
    let out_path = out_dir.path().join("Files.csv");
    let mut status = BufferedWriter::new();

    let mut sink = CsvSink::create(&out_path, false).expect("create");
    let first = scan_into(tmp.path(), &mut sink, &mut status).expect("first scan");
    sink.finish().expect("finish");

    let mut sink = CsvSink::create(&out_path, true).expect("append");
    let second = scan_into(tmp.path(), &mut sink, &mut status).expect("second scan");
    sink.finish().expect("finish");

    let out = fs::read_to_string(&out_path).expect("read output");
    let header = COLUMNS.join(",");

    assert_eq!(out.lines().next(), Some(header.as_str()));
    assert_eq!(out.lines().filter(|l| *l == header).count(), 1);
    assert_eq!(parse(&out).len(), first.files + second.files);
}

#[test]
fn failing_root_aborts_scan() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let mut sink = CsvSink::from_writer(Vec::new(), true).expect("sink");

    let err = scan_into(
        &tmp.path().join("missing"),
        &mut sink,
        &mut BufferedWriter::new(),
    )
    .unwrap_err();

    assert!(matches!(err, ScanError::Stat { .. }), "{err}");
    assert_eq!(sink.rows(), 0);
}
