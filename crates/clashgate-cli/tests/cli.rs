use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const REPORT: &str = "\
Name: Clash1
Image Location: D:\\clashes\\images\\cd000001.jpg
Clash Point: 10.5m, 20.25m, 3.00m
Item 1
Layer: DRN-PIPE
Path: Model.dwg>Layer>PRJ-RG-PH-ST-LT-KM-RV-H2-001-TR
Entity Handle: 1A2B
Item 2
Layer: SIGN-POST
Path: Model.dwg>Layer>PRJ-RG-PH-ST-LT-KM-RV-J1-001-TR
Entity Handle: 3C4D
------------------------
Name: Clash2
Image Location: D:\\clashes\\images\\cd000002.jpg
Clash Point: 1m, 2m, 3m
Item 1
Layer: TOP-A
Path: Model.dwg>Layer>PRJ-RG-PH-ST-LT-KM-RV-C1-001-TR
Item 2
Layer: TOP-B
Path: Model.dwg>Layer>PRJ-RG-PH-ST-LT-KM-RV-C1-001-TR
";

const MATRIX: &str = "\
title
,,,Drainage,Vertical Signage,Topography
,
,Drainage,,X,X,
,Vertical Signage,,X,O,X
,Topography,,,X,O
";

const EXCEPTIONS: &str = "#,Layer A,,Layer B\n1,PAV-EDGE,,DRN-PIPE\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("report.txt"), REPORT).unwrap();
        fs::create_dir_all(dir.path().join("matrix")).unwrap();
        fs::write(dir.path().join("matrix/Matriz.csv"), MATRIX).unwrap();
        fs::write(dir.path().join("matrix/Excecoes.csv"), EXCEPTIONS).unwrap();
        Self { dir }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("clashgate").unwrap();
        cmd.env("HOME", self.dir.path())
            .env_remove("CLASHGATE_MATRIX_SHEET")
            .env_remove("CLASHGATE_EXCEPTION_SHEET")
            .env_remove("CLASHGATE_IGNORE_MARKER")
            .env_remove("CLASHGATE_AGGREGATION_SCOPE")
            .env_remove("CLASHGATE_RESUME_LEDGERS")
            .env_remove("CLASHGATE_LOG")
            .current_dir(self.dir.path());
        cmd
    }

    fn run_args(&self) -> Vec<String> {
        let p = |rel: &str| self.path(rel).display().to_string();
        vec![
            "run".into(),
            "--report".into(),
            p("report.txt"),
            "--matrix".into(),
            p("matrix"),
            "--out".into(),
            p("out"),
            "--root".into(),
            p("."),
        ]
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn run_writes_ledgers_and_prints_summary() {
    let ws = Workspace::new();
    ws.cmd()
        .args(ws.run_args())
        .assert()
        .success()
        .stdout(contains("Parsed 2 clash records: 2 valid, 0 defective"))
        .stdout(contains("1 approved, 0 excused, 1 ignored, 0 unmatched"))
        .stdout(contains("Drainage x Vertical Signage: 1"));

    let drainage = read(&ws.path("out/Drainage.txt"));
    assert!(drainage.contains("ID: cd000001"));
    assert_eq!(drainage, read(&ws.path("out/Vertical-Signage.txt")));
    assert!(!ws.path("out/Topography.txt").exists());
    assert!(ws.path("out/conflict_summary.csv").exists());
}

#[test]
fn run_json_output() {
    let ws = Workspace::new();
    let output = ws
        .cmd()
        .args(ws.run_args())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["valid"], 2);
    assert_eq!(value["ledger_blocks_written"], 2);
    assert_eq!(value["discipline_groups"], 1);
}

#[test]
fn rerun_adds_nothing() {
    let ws = Workspace::new();
    ws.cmd().args(ws.run_args()).assert().success();
    let before = read(&ws.path("out/Drainage.txt"));
    ws.cmd()
        .args(ws.run_args())
        .assert()
        .success()
        .stdout(contains("Ledgers: 0 blocks written"));
    assert_eq!(read(&ws.path("out/Drainage.txt")), before);
}

#[test]
fn missing_report_fails_with_one_line() {
    let ws = Workspace::new();
    fs::remove_file(ws.path("report.txt")).unwrap();
    ws.cmd()
        .args(ws.run_args())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("[REPORT_NOT_FOUND]"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_sheet_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(ws.run_args())
        .args(["--matrix-sheet", "Other"])
        .assert()
        .failure()
        .stderr(contains("[SHEET_NOT_FOUND]").and(contains("'Other'")));
}

#[test]
fn unknown_format_is_rejected() {
    let ws = Workspace::new();
    ws.cmd()
        .args(ws.run_args())
        .args(["--format", "sarif"])
        .assert()
        .failure()
        .stderr(contains("unknown format 'sarif'"));
}

#[test]
fn classify_prints_discipline() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["classify", "Model.dwg>Layer>PRJ-RG-PH-ST-LT-KM-RV-J1-001-TR"])
        .assert()
        .success()
        .stdout("Vertical Signage\n");
    ws.cmd()
        .args(["classify", "no-separators-here"])
        .assert()
        .success()
        .stdout("unrecognized\n");
}

#[test]
fn config_prints_resolved_toml() {
    let ws = Workspace::new();
    fs::write(ws.path("clashgate.toml"), "[matrix]\nignore_marker = \"I\"\n").unwrap();
    ws.cmd()
        .args(["config", "--root"])
        .arg(ws.dir.path())
        .assert()
        .success()
        .stdout(contains("ignore_marker = \"I\""))
        .stdout(contains("matrix_sheet = \"Matriz\""));
}
