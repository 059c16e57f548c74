//! Property tests for the line grammar.

use bretz::{
    parse_line, parse_location, Aliquot, CaveRecord, Quadrangle, Range, RangeDirection, Sections,
    SurveyConstants, Township, TownshipDirection,
};
use proptest::prelude::*;

const ALIQUOTS: [Aliquot; 8] = [
    Aliquot::NortheastQuarter,
    Aliquot::SoutheastQuarter,
    Aliquot::SouthwestQuarter,
    Aliquot::NorthwestQuarter,
    Aliquot::NorthHalf,
    Aliquot::SouthHalf,
    Aliquot::EastHalf,
    Aliquot::WestHalf,
];

/// A capitalized word that cannot be mistaken for a reserved token.
fn plain_word() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8}".prop_filter("reserved prefix", |w| {
        !w.starts_with("Sec") && !w.starts_with("County") && !w.starts_with("Quadrangle")
    })
}

fn words(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(plain_word(), 1..=max).prop_map(|w| w.join(" "))
}

fn aliquot_parts() -> impl Strategy<Value = Vec<Aliquot>> {
    prop::collection::vec(prop::sample::select(ALIQUOTS.to_vec()), 0..6)
}

fn cave_record() -> impl Strategy<Value = CaveRecord> {
    (
        words(4),
        aliquot_parts(),
        prop::collection::vec(1u32..=36, 1..=3),
        (0u32..100, any::<bool>(), 0u32..40, any::<bool>()),
        words(2),
        (any::<bool>(), prop::option::of(words(3)), words(2)),
        prop::collection::vec("[a-z]{1,8}[.,]?", 0..10),
    )
        .prop_map(
            |(name, aliquot, sections, (tn, north, rn, east), county, quad, tail)| {
                let mut builder = CaveRecord::builder(name)
                    .sections(Sections::with_alternatives(sections[0], sections[1..].to_vec()))
                    .township(Township {
                        number: tn,
                        direction: if north {
                            TownshipDirection::North
                        } else {
                            TownshipDirection::South
                        },
                    })
                    .range(Range {
                        number: rn,
                        direction: if east {
                            RangeDirection::East
                        } else {
                            RangeDirection::West
                        },
                    })
                    .county(county)
                    .quadrangle(Quadrangle {
                        is_on_map: quad.0,
                        alias: quad.1,
                        name: quad.2,
                    })
                    .narrative(tail.join(" "));
                for part in aliquot {
                    builder = builder.aliquot(part);
                }
                builder.build()
            },
        )
}

proptest! {
    #[test]
    fn canonical_line_round_trips(cave in cave_record()) {
        let line = cave.canonical_line();
        let parsed = parse_location(&line).unwrap();
        prop_assert_eq!(parsed, cave.location);
    }

    #[test]
    fn parsing_is_deterministic(cave in cave_record()) {
        let line = cave.canonical_line();
        let constants = SurveyConstants::default();
        let first = parse_line(&line, &constants).unwrap();
        let second = parse_line(&line, &constants).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn aliquot_order_and_count_preserved(parts in aliquot_parts()) {
        let written: Vec<String> = parts
            .iter()
            .map(|p| format!("{}{}", p.code(), p.fraction()))
            .collect();
        let line = format!(
            "Test Cave {} sec. 9, T. 30 N., R. 5 W., Phelps County Shown on Rolla Quadrangle map",
            written.join(" ")
        );
        let parsed = parse_location(&line).unwrap();
        prop_assert_eq!(parsed.aliquot.len(), parts.len());
        prop_assert_eq!(parsed.aliquot, parts);
    }

    #[test]
    fn sections_never_empty(sections in prop::collection::vec(1u32..=36, 1..=4)) {
        let written: Vec<String> = sections.iter().map(u32::to_string).collect();
        let line = format!(
            "Test Cave sec. {}, T. 30 N., R. 5 W., Phelps County Shown on Rolla Quadrangle map",
            written.join(" or ")
        );
        let parsed = parse_location(&line).unwrap();
        prop_assert!(!parsed.section.as_slice().is_empty());
        prop_assert_eq!(parsed.section.as_slice(), &sections[..]);
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,120}") {
        let _ = parse_location(&text);
    }
}
