use clashgate_analysis::aggregation::LayerPairCounts;
use clashgate_analysis::classifier::{classify, DISCIPLINE_CODES};
use clashgate_analysis::{ApprovalMatrix, ClashRecordParser, ExceptionList, Grid};
use clashgate_core::config::MatrixConfig;
use proptest::prelude::*;

const KNOWN: [&str; 3] = ["Drainage", "Paving", "Topography"];

fn known_matrix() -> ApprovalMatrix {
    let grid = Grid::from_rows(vec![
        vec!["title"],
        vec!["", "", "", "Drainage", "Paving", "Topography"],
        vec!["", ""],
        vec!["", "Drainage", "", "X", "", "O"],
        vec!["", "Paving", "", "", "X", ""],
        vec!["", "Topography", "", "O", "", "X"],
    ]);
    match ApprovalMatrix::from_grid(grid, ExceptionList::new(), &MatrixConfig::default(), "M") {
        Ok(m) => m,
        Err(e) => panic!("fixture matrix failed to load: {e}"),
    }
}

proptest! {
    #[test]
    fn classify_never_panics_and_is_deterministic(path in ".{0,120}") {
        prop_assert_eq!(classify(&path), classify(&path));
    }

    #[test]
    fn table_codes_resolve_whatever_the_skipped_tokens(
        levels in prop::collection::vec("[A-Za-z0-9 ._]{0,8}", 2),
        skipped in prop::collection::vec("[A-Z0-9]{1,4}", 7),
        entry in 0..DISCIPLINE_CODES.len(),
        sequence in "[0-9]{3}",
        tail in "[A-Z0-9-]{0,10}",
    ) {
        let (code, discipline) = DISCIPLINE_CODES[entry];
        let path = format!(
            "{}>{}>{}-{code}-{sequence}-{tail}",
            levels[0],
            levels[1],
            skipped.join("-")
        );
        prop_assert_eq!(classify(&path), Some(discipline));
    }

    #[test]
    fn exceptions_are_symmetric(
        pairs in prop::collection::vec(("[a-d]{1,2}", "[a-d]{1,2}"), 0..12),
        a in "[a-d]{1,2}",
        b in "[a-d]{1,2}",
    ) {
        let list: ExceptionList = pairs.iter().map(|(x, y)| (x.as_str(), y.as_str())).collect();
        prop_assert_eq!(list.is_excused(&a, &b), list.is_excused(&b, &a));
    }

    #[test]
    fn pair_counting_ignores_orientation(
        pairs in prop::collection::vec(("[a-c]", "[a-c]", any::<bool>()), 0..30),
    ) {
        let mut forward = LayerPairCounts::new();
        let mut mixed = LayerPairCounts::new();
        for (a, b, flip) in &pairs {
            forward.record(a, b);
            if *flip { mixed.record(b, a) } else { mixed.record(a, b) }
        }
        prop_assert_eq!(forward.total(), pairs.len() as u64);
        prop_assert_eq!(forward.len(), mixed.len());
        for (a, b, _) in &pairs {
            prop_assert_eq!(forward.count(a, b), forward.count(b, a));
            prop_assert_eq!(forward.count(a, b), mixed.count(a, b));
        }
    }

    #[test]
    fn header_miss_is_never_reportable(
        known in 0..KNOWN.len(),
        unknown in "zz[a-z]{0,6}",
        unknown_first in any::<bool>(),
    ) {
        let m = known_matrix();
        let (a, b) = if unknown_first {
            (unknown.as_str(), KNOWN[known])
        } else {
            (KNOWN[known], unknown.as_str())
        };
        prop_assert!(!m.is_reportable(a, b));
    }

    #[test]
    fn parser_never_drops_records(
        blocks in prop::collection::vec((any::<bool>(), any::<bool>(), "[ -~]{0,20}"), 0..20),
    ) {
        let mut text = String::new();
        for (i, (has_layer, has_point, noise)) in blocks.iter().enumerate() {
            text.push_str(&format!("Name: Clash{i}\n"));
            text.push_str(&format!("Image Location: C:\\img\\id{i}.jpg\n"));
            if *has_point {
                text.push_str("Clash Point: 1m, 2m, 3m\n");
            }
            text.push_str("Item 1\n");
            if *has_layer {
                text.push_str("Layer: L1\n");
            }
            // Noise may not start a record or a separator.
            if !noise.trim_start().starts_with("Name:") && !noise.trim_start().starts_with('-') {
                text.push_str(noise);
                text.push('\n');
            }
        }
        let out = ClashRecordParser::parse_str(&text);
        prop_assert_eq!(out.total(), blocks.len());
        prop_assert!(out.valid.is_empty());
    }
}
