//! Township-Range-Section query strings.
//!
//! A TRS string is the comma-joined survey location used by township
//! geocoding services:
//!
//! ```text
//! State,Meridian,TownshipNumber,TownshipFraction,TownshipDirection,RangeNumber,RangeFraction,RangeDirection,Section,SectionDivision,TownshipDuplicate
//! MO,5,37,0,N,10,0,W,16,SENW,0
//! ```
//!
//! Those services only understand quarter codes and lot codes in the section
//! division. A half code makes every part written before it unusable, so the
//! division is trimmed with [`compliant_division`] before the string is
//! formed. The record itself keeps its full aliquot sequence.

use crate::record::CaveRecord;

/// Section division with half codes, and everything before the last one, removed.
///
/// Tokens are scanned from the end. Two-character codes and `L`-prefixed lot
/// codes are kept, the first other token starting with `N`, `S`, `E` or `W`
/// ends the scan, and anything else is skipped. Kept tokens are concatenated in
/// source order.
///
/// ```
/// use bretz::trs::compliant_division;
///
/// assert_eq!(compliant_division(&["SE", "NW"]), "SENW");
/// assert_eq!(compliant_division(&["NE", "S", "SW"]), "SW");
/// assert_eq!(compliant_division(&["SW", "N"]), "");
/// ```
#[must_use]
pub fn compliant_division<S: AsRef<str>>(codes: &[S]) -> String {
    let mut kept = Vec::new();
    for code in codes.iter().rev().map(AsRef::as_ref) {
        if code.chars().count() == 2 || code.starts_with('L') {
            kept.push(code);
        } else if code.starts_with(['N', 'S', 'E', 'W']) {
            break;
        }
    }
    kept.reverse();
    kept.concat()
}

/// TRS query string for `record`.
#[must_use]
pub fn trs_query(record: &CaveRecord) -> String {
    let location = &record.location;
    let constants = &record.constants;
    let codes: Vec<&str> = location.aliquot.iter().map(|part| part.code()).collect();
    format!(
        "{},{},{},{},{},{},{},{},{},{},{}",
        constants.state,
        constants.meridian,
        location.township.number,
        constants.township_fraction,
        location.township.direction,
        location.range.number,
        constants.range_fraction,
        location.range.direction,
        location.section.first(),
        compliant_division(&codes),
        constants.township_duplicate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plss::{Aliquot, Range, RangeDirection, Sections, Township, TownshipDirection};

    #[test]
    fn test_quarters_kept_in_order() {
        assert_eq!(compliant_division(&["SE", "NW"]), "SENW");
    }

    #[test]
    fn test_trailing_half_drops_everything() {
        assert_eq!(compliant_division(&["SE", "NW", "S"]), "");
    }

    #[test]
    fn test_half_drops_earlier_parts() {
        assert_eq!(compliant_division(&["NE", "S", "SW", "NW"]), "SWNW");
    }

    #[test]
    fn test_lot_codes_kept() {
        assert_eq!(compliant_division(&["N", "L12", "NE"]), "L12NE");
    }

    #[test]
    fn test_unknown_tokens_skipped() {
        assert_eq!(compliant_division(&["SE", "x", "NW"]), "SENW");
    }

    #[test]
    fn test_empty_division() {
        assert_eq!(compliant_division::<&str>(&[]), "");
    }

    #[test]
    fn test_trs_query() {
        let record = CaveRecord::builder("Boring Caverns")
            .aliquot(Aliquot::SoutheastQuarter)
            .aliquot(Aliquot::NorthwestQuarter)
            .sections(Sections::with_alternatives(16, [17]))
            .township(Township {
                number: 37,
                direction: TownshipDirection::North,
            })
            .range(Range {
                number: 10,
                direction: RangeDirection::West,
            })
            .build();
        assert_eq!(trs_query(&record), "MO,5,37,0,N,10,0,W,16,SENW,0");
    }

    #[test]
    fn test_trs_query_with_half() {
        let record = CaveRecord::builder("Another Cave")
            .aliquot(Aliquot::SouthHalf)
            .sections(Sections::new(15))
            .build();
        assert_eq!(trs_query(&record), "MO,5,1,0,N,1,0,W,15,,0");
        assert_eq!(record.section_division(), "S");
    }
}
