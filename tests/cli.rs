use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output};

fn iq_plot(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iq-plot"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to spawn iq-plot")
}

fn int8_capture() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let raw: Vec<u8> = [0i8, 0, 10, 0, 0, 0, -10, 0]
        .iter()
        .map(|v| v.to_ne_bytes()[0])
        .collect();
    file.write_all(&raw).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_missing_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bin");

    // No --no-window: the run must fail before any window is created.
    let out = iq_plot(&[path.as_os_str(), OsStr::new("8"), OsStr::new("-t"), OsStr::new("int8")]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    let expected = std::fs::canonicalize(dir.path()).unwrap().join("absent.bin");
    assert!(stderr.contains("No such file or directory"), "{stderr}");
    assert!(stderr.contains(&expected.display().to_string()), "{stderr}");
}

#[test]
fn test_no_window_runs_pipeline_and_exports() {
    let capture = int8_capture();
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("spectrum.csv");

    let out = iq_plot(&[
        capture.path().as_os_str(),
        OsStr::new("8"),
        OsStr::new("--type"),
        OsStr::new("int8"),
        OsStr::new("--export"),
        csv_path.as_os_str(),
        OsStr::new("--no-window"),
    ]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "frequency_hz,power_db");
    assert!(lines[1].starts_with("-4.0,"));
    assert!(lines[3].starts_with("0.0,"));
}

#[test]
fn test_unknown_type_is_usage_error() {
    let capture = int8_capture();
    let out = iq_plot(&[
        capture.path().as_os_str(),
        OsStr::new("8"),
        OsStr::new("-t"),
        OsStr::new("float32"),
        OsStr::new("--no-window"),
    ]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("float32"));
}

#[test]
fn test_text_parse_error_exits_with_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"1\n2\nx\n").unwrap();
    file.flush().unwrap();

    let out = iq_plot(&[file.path().as_os_str(), OsStr::new("8"), OsStr::new("--no-window")]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains(":3: 'x'"));
}
