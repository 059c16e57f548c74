//! Township and range designations: `T. 37 N.` and `R. 10 W.`
//!
//! The leading literal and the closing period are structural. Once the
//! number and direction have matched, a missing period is an incomplete
//! field rather than a mismatch.

use nom::combinator::{cut, map_opt};
use nom::error::context;
use nom::sequence::{pair, preceded, terminated};

use super::lexical::{letter, literal, number};
use super::PResult;
use crate::plss::{Range, RangeDirection, Township, TownshipDirection};

/// `T.` number `N`|`S` `.`
pub fn township(input: &str) -> PResult<'_, Township> {
    let body = pair(
        context("township number", number),
        context(
            "township direction 'N' or 'S'",
            map_opt(letter("NS"), TownshipDirection::from_letter),
        ),
    );
    let (rest, (number, direction)) = preceded(
        context("'T.'", literal("T.")),
        terminated(body, context("'.' after township", cut(literal(".")))),
    )(input)?;
    Ok((rest, Township { number, direction }))
}

/// `R.` number `E`|`W` `.`
pub fn range(input: &str) -> PResult<'_, Range> {
    let body = pair(
        context("range number", number),
        context(
            "range direction 'E' or 'W'",
            map_opt(letter("EW"), RangeDirection::from_letter),
        ),
    );
    let (rest, (number, direction)) = preceded(
        context("'R.'", literal("R.")),
        terminated(body, context("'.' after range", cut(literal(".")))),
    )(input)?;
    Ok((rest, Range { number, direction }))
}
