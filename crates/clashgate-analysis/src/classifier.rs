//! Discipline classification from element paths.
//!
//! A path looks like `Model.dwg>Layer>PRJ-RG-PH-ST-LT-KM-RV-H2-001-TR`: two
//! hierarchy levels separated by `>`, then a `-`-delimited code segment.
//! The first seven code tokens are project, region and phase codes with no
//! bearing on the discipline; the next two are `(code, sequence_number)`.
//! The skip counts are a project convention and stay positional.

/// Hierarchy separator in element paths.
pub const LEVEL_SEPARATOR: char = '>';

/// Hierarchy levels discarded before the code segment.
pub const LEVELS_SKIPPED: usize = 2;

/// Separator between tokens of the code segment.
pub const TOKEN_SEPARATOR: char = '-';

/// Leading code tokens discarded before the discipline code.
pub const TOKENS_SKIPPED: usize = 7;

/// Discipline resolved for `J1-001`, which overrides the code table.
pub const VERTICAL_SIGNAGE: &str = "Vertical Signage";

/// Discipline code table.
pub const DISCIPLINE_CODES: &[(&str, &str)] = &[
    ("C1", "Topography"),
    ("H2", "Drainage"),
    ("I2", "Paving"),
    ("J2", "Safety-Devices"),
    ("K2", "Lighting"),
    ("L2", "Structures"),
    ("L4", "Geotechnical/Containment"),
    ("M1", "Interferences"),
    ("N2", "Landscaping"),
    ("Q1", "Expropriation"),
    ("Z9", "General"),
];

/// Resolve the discipline encoded in `path`.
///
/// Returns `None` for unknown codes and for malformed paths (fewer than two
/// `>` levels, too few code tokens). Never panics.
pub fn classify(path: &str) -> Option<&'static str> {
    let (code, sequence) = code_tokens(path)?;
    discipline_for(code, sequence)
}

/// Extract `(code, sequence_number)` from a path.
pub fn code_tokens(path: &str) -> Option<(&str, &str)> {
    let mut levels = path.trim().splitn(LEVELS_SKIPPED + 1, LEVEL_SEPARATOR);
    for _ in 0..LEVELS_SKIPPED {
        levels.next()?;
    }
    let segment = levels.next()?;

    let mut tokens = segment.split(TOKEN_SEPARATOR).skip(TOKENS_SKIPPED);
    let code = tokens.next()?.trim();
    let sequence = tokens.next()?.trim();
    Some((code, sequence))
}

/// Look up a `(code, sequence_number)` pair.
pub fn discipline_for(code: &str, sequence: &str) -> Option<&'static str> {
    if code == "J1" && sequence == "001" {
        return Some(VERTICAL_SIGNAGE);
    }
    DISCIPLINE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, discipline)| *discipline)
}
