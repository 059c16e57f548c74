//! County name followed by the `County` keyword.

use nom::combinator::cut;
use nom::error::context;
use nom::sequence::terminated;

use super::lexical::{literal, name_word, unless, words_until};
use super::PResult;

/// One or more name words ended by the mandatory `County` keyword.
///
/// Name words are letters plus `-'.`, so the run also ends at the first
/// word containing a digit or other punctuation. If `County` is not there,
/// the field is incomplete.
pub fn county(input: &str) -> PResult<'_, String> {
    let name = context(
        "county name",
        words_until(unless(literal("County")), name_word),
    );
    terminated(name, context("'County'", cut(literal("County"))))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_county() {
        let (rest, name) = county(" Pulaski County Not shown").unwrap();
        assert_eq!(name, "Pulaski");
        assert_eq!(rest, " Not shown");
    }

    #[test]
    fn test_multi_word_county() {
        let (_, name) = county(" Ste. Genevieve County Shown").unwrap();
        assert_eq!(name, "Ste. Genevieve");
    }

    #[test]
    fn test_hyphen_and_apostrophe() {
        let (_, name) = county("O'Fallon-Smith County").unwrap();
        assert_eq!(name, "O'Fallon-Smith");
    }

    #[test]
    fn test_missing_keyword_is_incomplete() {
        let line = " Pulaski Not shown on Waynesville Quadrangle map 200 feet";
        match county(line).unwrap_err() {
            nom::Err::Failure(e) => {
                assert_eq!(e.expected, Some("'County'"));
                assert_eq!(e.input, "200 feet");
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_no_name_is_mismatch() {
        match county(" County Shown").unwrap_err() {
            nom::Err::Error(e) => assert_eq!(e.expected, Some("county name")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
