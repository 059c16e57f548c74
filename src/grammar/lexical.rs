//! Token-level matchers shared by the field grammars.
//!
//! Every matcher skips leading whitespace before it looks at input, so
//! `SE1/4`, `SE 1/4` and `SE  1/4` all tokenize the same way.

use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{digit1, multispace0, one_of};
use nom::combinator::{map_res, not, value};
use nom::error::context;
use nom::sequence::preceded;
use nom::Parser;

use super::{GrammarError, PResult};

/// Skip leading whitespace, then run `parser`.
pub fn token<'a, O, F>(parser: F) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    F: Parser<&'a str, O, GrammarError<'a>>,
{
    preceded(multispace0, parser)
}

/// Exact, case-sensitive literal.
pub fn literal<'a>(text: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    token(tag(text))
}

/// Exactly one letter out of `letters`.
pub fn letter<'a>(letters: &'static str) -> impl FnMut(&'a str) -> PResult<'a, char> {
    token(one_of(letters))
}

/// One or more decimal digits as an unsigned number.
pub fn number(input: &str) -> PResult<'_, u32> {
    token(map_res(digit1, str::parse::<u32>))(input)
}

/// Maximal run of non-whitespace, printable characters.
pub fn word(input: &str) -> PResult<'_, &str> {
    token(take_while1(is_word_char))(input)
}

/// Maximal run of letters plus `-`, `'` and `.`, as used in county and
/// quadrangle names.
pub fn name_word(input: &str) -> PResult<'_, &str> {
    token(take_while1(is_name_char))(input)
}

/// The comma closing a structured field; `expected` names that field.
pub fn comma<'a>(expected: &'static str) -> impl FnMut(&'a str) -> PResult<'a, ()> {
    value((), context(expected, literal(",")))
}

/// Succeed without consuming input only where `stop` would not match.
///
/// Free-text runs use this to end just before the next reserved token.
pub fn unless<'a, O, F>(stop: F) -> impl FnMut(&'a str) -> PResult<'a, ()>
where
    F: Parser<&'a str, O, GrammarError<'a>>,
{
    not(stop)
}

/// One or more `item` occurrences, each guarded by `unless(stop)`, joined
/// with single spaces.
pub fn words_until<'a, S, W>(
    mut stop: S,
    mut item: W,
) -> impl FnMut(&'a str) -> PResult<'a, String>
where
    S: FnMut(&'a str) -> PResult<'a, ()>,
    W: FnMut(&'a str) -> PResult<'a, &'a str>,
{
    move |input: &'a str| {
        let mut words: Vec<&'a str> = Vec::new();
        let mut rest = input;
        loop {
            let attempt = stop(rest).and_then(|(after, ())| item(after));
            match attempt {
                Ok((after, w)) => {
                    words.push(w);
                    rest = after;
                },
                Err(nom::Err::Error(e)) => {
                    if words.is_empty() {
                        return Err(nom::Err::Error(e));
                    }
                    return Ok((rest, words.join(" ")));
                },
                Err(e) => return Err(e),
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '-' | '\'' | '.')
}
