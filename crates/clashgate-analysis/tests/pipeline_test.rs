//! End-to-end pipeline tests over files on disk.

mod common;

use std::fs;
use std::path::Path;

use clashgate_analysis::{ClashPipeline, RunInputs, Verdict};
use clashgate_core::config::{AggregationScope, MatrixConfig, OutputConfig};
use clashgate_core::errors::{ClashErrorCode, PipelineError};
use clashgate_core::ClashConfig;
use common::*;

struct Fixture {
    _dir: tempfile::TempDir,
    inputs: RunInputs,
}

fn fixture(report: &str) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    fs::write(&report_path, report).unwrap();
    let matrix = dir.path().join("matrix");
    write_csv_workbook(&matrix);
    let inputs = RunInputs {
        report: report_path,
        matrix,
        out_dir: dir.path().join("out"),
    };
    Fixture { _dir: dir, inputs }
}

fn two_record_report() -> String {
    [
        clash_block("Clash1", "cd000001", (DRAINAGE, SIGNAGE), ("DRN-PIPE", "SIGN-POST")),
        clash_block("Clash2", "cd000002", (TOPOGRAPHY, TOPOGRAPHY), ("TOP-A", "TOP-B")),
    ]
    .concat()
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn test_two_record_scenario() {
    let fx = fixture(&two_record_report());
    let summary = ClashPipeline::with_defaults().run(&fx.inputs).unwrap();
    let out = &fx.inputs.out_dir;

    assert_eq!(summary.parsed, 2);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.defective, 0);
    assert_eq!(summary.verdicts.approved, 1);
    assert_eq!(summary.verdicts.ignored, 1);
    assert_eq!(summary.ledger_blocks_written, 2);

    let drainage = read(out, "Drainage.txt");
    let signage = read(out, "Vertical-Signage.txt");
    assert_eq!(drainage, signage);
    assert!(drainage.contains("ID: cd000001\n"));
    assert!(drainage.contains("Objetos: Drainage X Vertical Signage\n"));
    assert!(!drainage.contains("cd000002"));
    assert!(!out.join("Topography.txt").exists());

    assert_eq!(read(out, "defects.txt"), "");

    let csv = read(out, "conflict_summary.csv");
    assert!(csv.contains("Drainage,Vertical Signage,,,1"));
    assert!(!csv.contains("Topography,Topography"));
    assert_eq!(summary.discipline_groups, 1);
    assert_eq!(summary.conflicts, 1);
}

#[test]
fn test_rerun_is_idempotent() {
    let fx = fixture(&two_record_report());
    let pipeline = ClashPipeline::with_defaults();
    pipeline.run(&fx.inputs).unwrap();
    let first = read(&fx.inputs.out_dir, "Drainage.txt");

    let summary = pipeline.run(&fx.inputs).unwrap();
    assert_eq!(summary.ledger_blocks_written, 0);
    assert_eq!(read(&fx.inputs.out_dir, "Drainage.txt"), first);
    assert_eq!(read(&fx.inputs.out_dir, "Vertical-Signage.txt"), first);
}

#[test]
fn test_duplicate_ids_in_one_report_written_once() {
    let report = [
        clash_block("Clash1", "dup", (DRAINAGE, SIGNAGE), ("DRN-PIPE", "SIGN-POST")),
        clash_block("Clash1 again", "dup", (DRAINAGE, SIGNAGE), ("DRN-PIPE", "SIGN-POST")),
    ]
    .concat();
    let fx = fixture(&report);
    let config = ClashConfig {
        output: OutputConfig {
            resume_ledgers: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };
    let summary = ClashPipeline::new(config).run(&fx.inputs).unwrap();
    assert_eq!(summary.ledger_blocks_written, 2);
    assert_eq!(read(&fx.inputs.out_dir, "Drainage.txt").matches("ID: dup").count(), 1);
}

#[test]
fn test_defective_record_never_reaches_ledgers() {
    let broken = clash_block("Broken", "bad01", (DRAINAGE, SIGNAGE), ("DRN-PIPE", "X"))
        .replace("Layer: X\n", "");
    let fx = fixture(&broken);
    let summary = ClashPipeline::with_defaults().run(&fx.inputs).unwrap();

    assert_eq!(summary.defective, 1);
    assert_eq!(summary.ledger_blocks_written, 0);
    assert!(!fx.inputs.out_dir.join("Drainage.txt").exists());
    let defects = read(&fx.inputs.out_dir, "defects.txt");
    assert!(defects.contains("ID: bad01\n"));
    assert!(defects.contains("Missing: layer_2\n"));
}

#[test]
fn test_non_numeric_clash_point_goes_to_defects() {
    let report = clash_block("Garbled", "bad02", (DRAINAGE, SIGNAGE), ("DRN-PIPE", "SIGN-POST"))
        .replace("1204.35m, 88.10m, 12.00m", "a, b, c");
    let fx = fixture(&report);
    let summary = ClashPipeline::with_defaults().run(&fx.inputs).unwrap();

    assert_eq!(summary.valid, 0);
    assert_eq!(summary.defective, 1);
    assert_eq!(summary.ledger_blocks_written, 0);
    assert!(!fx.inputs.out_dir.join("Drainage.txt").exists());
    let defects = read(&fx.inputs.out_dir, "defects.txt");
    assert!(defects.contains("ID: bad02\n"));
    assert!(defects.contains("X: N/A\n"));
    assert!(defects.contains("Missing: coordinate\n"));
}

#[test]
fn test_excused_records_still_aggregate_by_default() {
    let report = clash_block("Ex", "ex01", (PAVING, DRAINAGE), ("PAV-EDGE", "DRN-PIPE"));
    let fx = fixture(&report);
    let summary = ClashPipeline::with_defaults().run(&fx.inputs).unwrap();

    assert_eq!(summary.verdicts.excused, 1);
    assert_eq!(summary.ledger_blocks_written, 0);
    assert_eq!(summary.conflicts, 1);
}

#[test]
fn test_all_valid_scope_counts_ignored_records() {
    let fx = fixture(&two_record_report());
    let mut config = ClashConfig::default();
    config.aggregation.scope = Some(AggregationScope::AllValid);
    let summary = ClashPipeline::new(config).run(&fx.inputs).unwrap();

    assert_eq!(summary.discipline_groups, 2);
    assert!(summary
        .aggregate
        .get("Topography", "Topography")
        .is_some_and(|g| g.total == 1));
}

#[test]
fn test_analyze_is_pure() {
    let matrix = clashgate_analysis::ApprovalMatrix::load(
        &workbook(),
        &MatrixConfig::default(),
    )
    .unwrap();
    let analysis = ClashPipeline::with_defaults().analyze(&two_record_report(), &matrix);
    assert_eq!(analysis.verdicts, vec![Verdict::Approved, Verdict::Ignored]);
    assert_eq!(analysis.approved().count(), 1);
    assert_eq!(analysis.reportable().count(), 1);
}

#[test]
fn test_missing_report_is_fatal() {
    let mut fx = fixture("");
    fx.inputs.report = fx.inputs.report.with_file_name("absent.txt");
    let err = ClashPipeline::with_defaults().run(&fx.inputs).unwrap_err();
    assert!(matches!(err, PipelineError::Report(_)));
    assert_eq!(err.error_code(), "REPORT_NOT_FOUND");
    assert!(!fx.inputs.out_dir.exists());
}

#[test]
fn test_missing_workbook_and_sheet_are_fatal() {
    let mut fx = fixture(&two_record_report());
    fs::remove_file(fx.inputs.matrix.join("Excecoes.csv")).unwrap();
    let err = ClashPipeline::with_defaults().run(&fx.inputs).unwrap_err();
    assert_eq!(err.error_code(), "SHEET_NOT_FOUND");

    fx.inputs.matrix = fx.inputs.matrix.join("nowhere");
    let err = ClashPipeline::with_defaults().run(&fx.inputs).unwrap_err();
    assert_eq!(err.error_code(), "WORKBOOK_NOT_FOUND");
    assert!(err.display_string().starts_with("[WORKBOOK_NOT_FOUND]"));
}

#[test]
fn test_non_utf8_report_is_decoded_lossily() {
    let fx = fixture("");
    let mut bytes = two_record_report().into_bytes();
    bytes.extend_from_slice(b"Name: \xff\xfe broken\n");
    fs::write(&fx.inputs.report, bytes).unwrap();

    let summary = ClashPipeline::with_defaults().run(&fx.inputs).unwrap();
    assert_eq!(summary.parsed, 3);
    assert_eq!(summary.defective, 1);
}

#[test]
fn test_byte_order_mark_does_not_hide_first_name() {
    let fx = fixture("");
    let mut bytes = "\u{feff}".as_bytes().to_vec();
    bytes.extend_from_slice(two_record_report().as_bytes());
    fs::write(&fx.inputs.report, bytes).unwrap();

    let summary = ClashPipeline::with_defaults().run(&fx.inputs).unwrap();
    assert_eq!(summary.parsed, 2);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.defective, 0);
    assert!(read(&fx.inputs.out_dir, "Drainage.txt").contains("ID: cd000001\n"));
}
