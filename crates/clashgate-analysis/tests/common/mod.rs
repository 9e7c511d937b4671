//! Shared report and matrix fixtures for the integration tests.
#![allow(dead_code)]

use clashgate_analysis::matrix::InMemoryWorkbook;
use clashgate_analysis::Grid;

pub const DRAINAGE: &str = "H2-001";
pub const SIGNAGE: &str = "J1-001";
pub const TOPOGRAPHY: &str = "C1-001";
pub const PAVING: &str = "I2-001";
pub const GENERAL: &str = "Z9-004";

pub fn element_path(code: &str) -> String {
    format!("Model.dwg>Layer>PRJ-RG-PH-ST-LT-KM-RV-{code}-TR")
}

/// One full report block, closed by a dashed separator.
pub fn clash_block(name: &str, id: &str, codes: (&str, &str), layers: (&str, &str)) -> String {
    format!(
        "Name: {name}\n\
         Distance: -0.120m\n\
         Image Location: D:\\clashes\\images\\{id}.jpg\n\
         HardStatus: New\n\
         Clash Point: 1204.35m, 88.10m, 12.00m\n\
         Date Created: 2024/05/02 10:11\n\
         Item 1\n\
         Layer: {l1}\n\
         Path: {p1}\n\
         Entity Handle: 1A2B\n\
         Item 2\n\
         Layer: {l2}\n\
         Path: {p2}\n\
         Entity Handle: 3C4D\n\
         ------------------------\n",
        l1 = layers.0,
        l2 = layers.1,
        p1 = element_path(codes.0),
        p2 = element_path(codes.1),
    )
}

/// Rows of the approval matrix sheet in the default layout: title row,
/// column headers on row 2 from column 4, row headers in column 2 from row 4.
pub fn matrix_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Interference matrix"],
        vec!["", "", "", "Drainage", "Vertical Signage", "Topography", "Paving"],
        vec!["", ""],
        vec!["", "Drainage", "", "X", "X", "", ""],
        vec!["", "Vertical Signage", "", "X", "O", "X", ""],
        vec!["", "Topography", "", "", "X", "O", "X"],
        vec!["", "Paving", "", "O", "", "X", "O"],
    ]
}

/// Exception sheet: `(n, layer_a, _, layer_b)` rows after a title row.
pub fn exception_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["#", "Layer A", "", "Layer B"],
        vec!["1", "PAV-EDGE", "", "DRN-PIPE"],
        vec!["2", "SIGN-POST", "", ""],
    ]
}

pub fn workbook() -> InMemoryWorkbook {
    InMemoryWorkbook::new()
        .with_sheet("Matriz", Grid::from_rows(matrix_rows()))
        .with_sheet("Excecoes", Grid::from_rows(exception_rows()))
}

/// Write the fixture workbook as `<sheet>.csv` files under `dir`.
pub fn write_csv_workbook(dir: &std::path::Path) {
    std::fs::create_dir_all(dir).unwrap();
    for (sheet, rows) in [("Matriz", matrix_rows()), ("Excecoes", exception_rows())] {
        let text: String = rows.iter().map(|r| format!("{}\n", r.join(","))).collect();
        std::fs::write(dir.join(format!("{sheet}.csv")), text).unwrap();
    }
}
