use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use diverse_das::USAGE;

const TAXONOMY: &str = "sp1\tA\t1\tname\tcommon\tsyn\tACC1\tArchaea\n";
const MEMBERSHIP: &str = "\
DA\tDomains\tCollapsed_Domains\tTaxa
DA1\tx\ty\tpfam_ACC1_label_sp1
DA2\tx\ty\tup_Z_label_NONE
";

fn get_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_diverse-das"))
}

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(get_binary())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run diverse-das")
}

fn setup() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("t.tsv"), TAXONOMY).expect("Failed to write taxonomy");
    fs::write(dir.path().join("m.tsv"), MEMBERSHIP).expect("Failed to write membership");
    dir
}

#[test]
fn test_usage_on_missing_args() {
    let dir = setup();
    for args in [&[][..], &["m.tsv"][..]] {
        let output = run_cli(dir.path(), args);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{USAGE}\n"));
    }
}

#[test]
fn test_table_on_stdout() {
    let dir = setup();
    let output = run_cli(dir.path(), &["m.tsv", "t.tsv"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "#DA\tBreadth\tArchaea\tBacteria\tEukaryota\nDA1\t1\t1\t0\t0\nDA2\t0\t0\t0\t0\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_debug_writes_diagnostics_to_stderr_only() {
    let dir = setup();
    let quiet = run_cli(dir.path(), &["m.tsv", "t.tsv"]);
    let debug = run_cli(dir.path(), &["-d", "m.tsv", "t.tsv"]);

    assert_eq!(debug.status.code(), Some(0));
    assert_eq!(debug.stdout, quiet.stdout);
    let stderr = String::from_utf8_lossy(&debug.stderr);
    assert!(stderr.contains("No taxonomy information found for either Z nor NONE"));
    assert!(stderr.contains("species codes in"));
}

#[test]
fn test_extra_args_are_ignored() {
    let dir = setup();
    fs::write(dir.path().join("s.txt"), "# keep\nDA1\n").expect("Failed to write subset");
    let output = run_cli(dir.path(), &["m.tsv", "t.tsv", "s.txt", "extra"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "#DA\tBreadth\tArchaea\tBacteria\tEukaryota\nDA1\t1\t1\t0\t0\n"
    );
}

#[test]
fn test_missing_file_exits_with_usage() {
    let dir = setup();
    let output = run_cli(dir.path(), &["m.tsv", "nope.tsv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open nope.tsv"));
    assert!(stderr.contains(USAGE));
}

#[test]
fn test_malformed_row_exits_nonzero() {
    let dir = setup();
    fs::write(dir.path().join("bad.tsv"), "h\nDA1\tx\n").expect("Failed to write membership");
    let output = run_cli(dir.path(), &["bad.tsv", "t.tsv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing field 3"));
}
