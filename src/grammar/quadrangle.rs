//! Quadrangle map clause.
//!
//! `Shown on Richland Quadrangle map`, `Not shown on Waynesville Quadrangle
//! map`, or `Shown as Wet Cave on Bado Quadrangle map`. A single leading
//! letter decides between `S` (shown) and `Not s` (not shown); both share the
//! `hown` suffix.

use nom::branch::alt;
use nom::combinator::{cut, map, opt, value};
use nom::error::context;
use nom::sequence::{pair, preceded, terminated};

use super::lexical::{literal, name_word, unless, word, words_until};
use super::PResult;
use crate::plss::Quadrangle;

/// `S` → on the map, `Not s` → not on the map.
fn map_status(input: &str) -> PResult<'_, bool> {
    alt((
        value(true, literal("S")),
        value(false, pair(literal("Not"), literal("s"))),
    ))(input)
}

fn quadrangle_suffix(input: &str) -> PResult<'_, ()> {
    value((), pair(literal("Quadrangle"), literal("map")))(input)
}

/// `as` followed by alias words up to `on`.
fn alias(input: &str) -> PResult<'_, String> {
    preceded(
        literal("as"),
        context("map alias", words_until(unless(literal("on")), word)),
    )(input)
}

/// The full quadrangle clause.
pub fn quadrangle(input: &str) -> PResult<'_, Quadrangle> {
    let status = terminated(
        context("'Shown' or 'Not shown'", map_status),
        context("'hown'", literal("hown")),
    );
    let name = context(
        "quadrangle name",
        words_until(unless(quadrangle_suffix), name_word),
    );
    let clause = pair(
        pair(status, opt(alias)),
        preceded(context("'on'", literal("on")), name),
    );
    map(
        terminated(
            clause,
            context("'Quadrangle map'", cut(quadrangle_suffix)),
        ),
        |((is_on_map, alias), name)| Quadrangle {
            is_on_map,
            alias,
            name,
        },
    )(input)
}
