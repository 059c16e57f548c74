//! Aliquot parts: quarter and half subdivisions of a section.
//!
//! Quarters are written `NE1/4`, halves `S1/2`. Any number may appear, in any
//! order; the fraction markers are consumed and never stored.

use nom::branch::alt;
use nom::combinator::{map, map_opt};
use nom::multi::many0;
use nom::sequence::terminated;

use super::lexical::{letter, literal};
use super::PResult;
use crate::plss::Aliquot;

/// A quarter code followed by `1/4`.
pub fn quarter(input: &str) -> PResult<'_, Aliquot> {
    let code = alt((literal("NE"), literal("SE"), literal("SW"), literal("NW")));
    terminated(map_opt(code, Aliquot::quarter_from_code), literal("1/4"))(input)
}

/// A half letter followed by `1/2`.
pub fn half(input: &str) -> PResult<'_, Aliquot> {
    terminated(map_opt(letter("NESW"), Aliquot::half_from_letter), literal("1/2"))(input)
}

/// Zero or more aliquot parts in source order.
pub fn aliquot_parts(input: &str) -> PResult<'_, Vec<Aliquot>> {
    many0(alt((quarter, half)))(input)
}

/// Whether an aliquot part starts here. Used to end the cave name.
pub fn starts_aliquot(input: &str) -> PResult<'_, ()> {
    map(alt((half, quarter)), |_| ())(input)
}
