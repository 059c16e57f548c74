//! Cave name: leading words up to the first PLSS token.
//!
//! Names may contain any punctuation or capitalization. They end just before
//! a word where an aliquot part or the section keyword would start, so a
//! name word beginning with `Sec` ends the name too.

use nom::branch::alt;
use nom::error::context;

use super::aliquot::starts_aliquot;
use super::lexical::{unless, word, words_until};
use super::section::section_keyword;
use super::PResult;

/// One or more free-text words, space-joined.
pub fn cave_name(input: &str) -> PResult<'_, String> {
    let reserved = alt((starts_aliquot, section_keyword));
    context("cave name", words_until(unless(reserved), word))(input)
}
