//! Section keyword and numbers: `sec. 16`, `Sec. 15 or 22`.

use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{pair, preceded, tuple};

use super::lexical::{letter, literal, number};
use super::PResult;
use crate::plss::Sections;

/// `S`/`s`, `ec`, optional `.`; consumed and not retained.
pub fn section_keyword(input: &str) -> PResult<'_, ()> {
    map(tuple((letter("Ss"), literal("ec"), opt(literal(".")))), |_| ())(input)
}

/// The section keyword and one or more section numbers joined by `or`.
pub fn section(input: &str) -> PResult<'_, Sections> {
    let numbers = pair(
        context("section number", number),
        many0(preceded(literal("or"), number)),
    );
    preceded(
        context("'Sec.' keyword", section_keyword),
        map(numbers, |(first, rest): (u32, Vec<u32>)| {
            Sections::with_alternatives(first, rest)
        }),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_section() {
        let (rest, sections) = section(" sec. 16, T. 37 N.").unwrap();
        assert_eq!(sections.as_slice(), &[16]);
        assert_eq!(rest, ", T. 37 N.");
    }

    #[test]
    fn test_capitalized_without_period() {
        let (_, sections) = section("Sec 7,").unwrap();
        assert_eq!(sections.first(), 7);
    }

    #[test]
    fn test_alternative_sections() {
        let (rest, sections) = section("Sec. 15 or 22, T. 36 N.").unwrap();
        assert_eq!(sections.as_slice(), &[15, 22]);
        assert_eq!(rest, ", T. 36 N.");
    }

    #[test]
    fn test_three_alternatives() {
        let (_, sections) = section("sec. 1 or 2 or 12,").unwrap();
        assert_eq!(sections.as_slice(), &[1, 2, 12]);
    }

    #[test]
    fn test_missing_keyword_fails() {
        let err = section(" 16, T. 37 N.").unwrap_err();
        match err {
            nom::Err::Error(e) => assert_eq!(e.expected, Some("'Sec.' keyword")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_number_fails() {
        let err = section("sec. , T. 37 N.").unwrap_err();
        match err {
            nom::Err::Error(e) => assert_eq!(e.expected, Some("section number")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
