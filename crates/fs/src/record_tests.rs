use super::*;

fn sample_record(stat: RawStat) -> OutputRecord {
    OutputRecord {
        file_name: "report.pdf".into(),
        full_path: PathBuf::from("/data/report.pdf"),
        modified: Some(DisplayTime {
            date: "2023-11-14".into(),
            time: "22:13:20".into(),
        }),
        accessed: None,
        created: None,
        size: "1.5KB".into(),
        kind: FileKind::File,
        stat,
    }
}

fn to_csv(record: &OutputRecord, headers: bool) -> String {
    let mut w = csv::WriterBuilder::new()
        .has_headers(headers)
        .from_writer(Vec::new());
    w.serialize(record).expect("serialize record");
    String::from_utf8(w.into_inner().expect("flush")).expect("utf8")
}

#[test]
fn from_mode_classifies_by_format_bits() {
    let cases: &[(u32, FileKind)] = &[
        (0o100_644, FileKind::File),
        (0o100_755, FileKind::File),
        (0o040_755, FileKind::Directory),
        (0o120_777, FileKind::Unknown), // symlink
        (0o140_755, FileKind::Unknown), // socket
        (0o010_644, FileKind::Unknown), // fifo
        (0o020_620, FileKind::Unknown), // char device
        (0o060_660, FileKind::Unknown), // block device
        (0, FileKind::Unknown),
    ];

    for (mode, expected) in cases {
        assert_eq!(
            FileKind::from_mode(*mode),
            *expected,
            "mode {:o} should classify as {:?}",
            mode,
            expected
        );
    }
}

#[test]
fn file_kind_display_names() {
    assert_eq!(FileKind::File.as_str(), "file");
    assert_eq!(FileKind::Directory.as_str(), "directory");
    assert_eq!(FileKind::Unknown.as_str(), "unknown");
}

#[test]
fn timestamp_normalizes_negative_instants() {
    let cases: &[(i128, i64, u32)] = &[
        (0, 0, 0),
        (1_500_000_000, 1, 500_000_000),
        (-1, -1, 999_999_999),
        (-1_000_000_000, -1, 0),
        (-1_500_000_000, -2, 500_000_000),
    ];

    for (total, secs, nanos) in cases {
        let ts = Timestamp::from_nanos(*total);
        assert_eq!((ts.secs, ts.nanos), (*secs, *nanos), "from_nanos({total})");
        assert_eq!(ts.as_nanos(), *total);
    }
}

#[test]
fn timestamp_from_stat_parts() {
    let ts = Timestamp::from_parts(1_700_000_000, 123_456_789);
    assert_eq!(ts.secs, 1_700_000_000);
    assert_eq!(ts.nanos, 123_456_789);
    assert_eq!(ts.as_nanos(), 1_700_000_000_123_456_789);
}

#[test]
fn serialized_header_matches_columns() {
    let out = to_csv(&sample_record(RawStat::default()), true);
    let header = out.lines().next().expect("header line");
    assert_eq!(header, COLUMNS.join(","));
}

#[test]
fn missing_attributes_are_empty_fields() {
    let stat = RawStat {
        kind: FileKind::File,
        size: 1536,
        ..RawStat::default()
    };
    let out = to_csv(&sample_record(stat), false);
    let row = out.lines().next().expect("row");
    let fields: Vec<&str> = row.split(',').collect();

    assert_eq!(fields.len(), COLUMNS.len());

    let col = |name: &str| fields[COLUMNS.iter().position(|c| *c == name).expect("column")];
    assert_eq!(col("File_Name"), "report.pdf");
    assert_eq!(col("Date_Modified"), "2023-11-14");
    assert_eq!(col("Date_Accessed"), "");
    assert_eq!(col("Modified"), "2023-11-14 22:13:20");
    assert_eq!(col("Size"), "1.5KB");
    assert_eq!(col("Type"), "file");
    assert_eq!(col("st_size"), "1536");
    assert_eq!(col("st_mode"), "");
    assert_eq!(col("st_atime_ns"), "");
    assert_eq!(col("st_fstype"), "");
    assert_eq!(col("st_file_attributes"), "");
}

#[test]
fn present_attributes_are_rendered() {
    let stat = RawStat {
        kind: FileKind::File,
        mode: Some(0o100_644),
        ino: Some(42),
        uid: Some(1000),
        size: 10,
        modified: Some(Timestamp::from_parts(1_700_000_000, 5)),
        flags: Some(0),
        ..RawStat::default()
    };
    let out = to_csv(&sample_record(stat), false);
    let fields: Vec<&str> = out.trim_end().split(',').collect();
    let col = |name: &str| fields[COLUMNS.iter().position(|c| *c == name).expect("column")];

    assert_eq!(col("st_mode"), "33188");
    assert_eq!(col("st_ino"), "42");
    assert_eq!(col("st_uid"), "1000");
    assert_eq!(col("st_mtime"), "1700000000");
    assert_eq!(col("st_mtime_ns"), "1700000000000000005");
    assert_eq!(col("st_flags"), "0");
    assert_eq!(col("st_ctime"), "");
}

#[test]
fn combined_display_time() {
    let t = DisplayTime {
        date: "1999-12-31".into(),
        time: "23:59:59".into(),
    };
    assert_eq!(t.combined(), "1999-12-31 23:59:59");
}
