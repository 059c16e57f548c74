//! Description tail: whatever text follows the quadrangle clause.

use nom::combinator::map;
use nom::multi::many0;

use super::lexical::word;
use super::PResult;

/// Zero or more words, space-joined. Never fails.
pub fn description(input: &str) -> PResult<'_, String> {
    map(many0(word), |words: Vec<&str>| words.join(" "))(input)
}
