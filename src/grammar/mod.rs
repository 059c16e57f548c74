//! Grammar for one cave description line.
//!
//! Each submodule is a small `nom` parser over the remaining text of the
//! line. They are composed in a fixed order by [`crate::assembler`]:
//!
//! ```text
//! CAVE         ::= NAME ALIQUOT SECTION "," TOWNSHIP "," RANGE "," COUNTY QUAD DESCRIPTION
//! ALIQUOT      ::= ((NE|SE|SW|NW) "1/4" | (N|E|S|W) "1/2")*
//! SECTION      ::= (S|s) "ec" "."? num ("or" num)*
//! TOWNSHIP     ::= "T." num (N|S) "."
//! RANGE        ::= "R." num (E|W) "."
//! COUNTY       ::= NAME_WORD+ "County"
//! QUAD         ::= ("Not" "s" | "S") "hown" ("as" WORD+)? "on" NAME_WORD+ "Quadrangle" "map"
//! DESCRIPTION  ::= WORD*
//! ```
//!
//! Free-text runs (the cave name, county, alias and quadrangle name) stop
//! by negative lookahead on the token that ends them.

pub mod aliquot;
pub mod county;
pub mod description;
pub mod lexical;
pub mod name;
pub mod quadrangle;
pub mod section;
pub mod township;

use std::num::ParseIntError;

use nom::error::{ContextError, ErrorKind, FromExternalError, ParseError};
use nom::IResult;

/// Result of a grammar rule over `&str` input.
pub type PResult<'a, O> = IResult<&'a str, O, GrammarError<'a>>;

/// Grammar error carrying the remaining input and what was expected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError<'a> {
    /// Input remaining where the failure happened
    pub input: &'a str,
    /// The nom combinator that failed
    pub kind: ErrorKind,
    /// Innermost context label
    pub expected: Option<&'static str>,
}

impl GrammarError<'_> {
    /// The expected token, or a generic label when no context was attached.
    #[must_use]
    pub fn expected_or_default(&self) -> &'static str {
        self.expected.unwrap_or("well-formed text")
    }
}

impl<'a> ParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        GrammarError {
            input,
            kind,
            expected: None,
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<&'a str> for GrammarError<'a> {
    fn add_context(_input: &'a str, ctx: &'static str, mut other: Self) -> Self {
        if other.expected.is_none() {
            other.expected = Some(ctx);
        }
        other
    }
}

impl<'a> FromExternalError<&'a str, ParseIntError> for GrammarError<'a> {
    fn from_external_error(input: &'a str, kind: ErrorKind, _e: ParseIntError) -> Self {
        Self::from_error_kind(input, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::bytes::complete::tag;
    use nom::error::context;

    #[test]
    fn test_innermost_context_wins() {
        let mut parser = context("outer", context("inner", tag::<_, _, GrammarError>("x")));
        let err = parser("y").unwrap_err();
        match err {
            nom::Err::Error(e) => {
                assert_eq!(e.expected, Some("inner"));
                assert_eq!(e.input, "y");
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_default_expected_label() {
        let e = GrammarError::from_error_kind("abc", ErrorKind::Tag);
        assert_eq!(e.expected_or_default(), "well-formed text");
    }
}
