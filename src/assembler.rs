//! Record assembly: the grammar stages in their fixed order.
//!
//! A line is parsed strictly left to right:
//!
//! ```text
//! name → aliquot → section → "," → township → "," → range → "," → county → quadrangle → description
//! ```
//!
//! Once a stage succeeds it is never revisited. The first stage that fails
//! rejects the whole line, and no partial record is produced.

use nom::Err;

use crate::config::SurveyConstants;
use crate::error::{ParseFailure, Stage};
use crate::grammar::{
    aliquot, county, description, lexical, name, quadrangle, section, township, PResult,
};
use crate::record::{CaveLocation, CaveRecord};

/// Parse the structured fields of one line.
///
/// # Errors
///
/// Returns [`ParseFailure::EmptyInput`] for a blank line, otherwise the
/// failure of the first stage that did not match. Positions are byte offsets
/// into the trimmed line.
pub fn parse_location(line: &str) -> Result<CaveLocation, ParseFailure> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseFailure::EmptyInput);
    }

    let (rest, name) = run(Stage::Name, line, line, name::cave_name)?;
    let (rest, aliquot) = run(Stage::Aliquot, line, rest, aliquot::aliquot_parts)?;
    let (rest, section) = run(Stage::Section, line, rest, section::section)?;
    let (rest, ()) = run(Stage::Separator, line, rest, lexical::comma("',' after section"))?;
    let (rest, township) = run(Stage::Township, line, rest, township::township)?;
    let (rest, ()) = run(Stage::Separator, line, rest, lexical::comma("',' after township"))?;
    let (rest, range) = run(Stage::Range, line, rest, township::range)?;
    let (rest, ()) = run(Stage::Separator, line, rest, lexical::comma("',' after range"))?;
    let (rest, county) = run(Stage::County, line, rest, county::county)?;
    let (rest, quadrangle) = run(Stage::Quadrangle, line, rest, quadrangle::quadrangle)?;
    let (_, description) = run(Stage::Description, line, rest, description::description)?;

    Ok(CaveLocation {
        name,
        aliquot,
        section,
        township,
        range,
        county,
        quadrangle,
        description,
    })
}

/// Parse one line into a record carrying `constants`.
///
/// # Errors
///
/// See [`parse_location`].
pub fn parse_line(line: &str, constants: &SurveyConstants) -> Result<CaveRecord, ParseFailure> {
    let location = parse_location(line)?;
    Ok(CaveRecord::new(location, line, constants.clone()))
}

/// Run one stage, translating grammar errors into a [`ParseFailure`].
///
/// A recoverable nom error is a mismatch; a `cut` failure means the field
/// began but its trailing literal is missing.
fn run<'a, O>(
    stage: Stage,
    line: &'a str,
    input: &'a str,
    mut parser: impl FnMut(&'a str) -> PResult<'a, O>,
) -> Result<(&'a str, O), ParseFailure> {
    parser(input).map_err(|err| match err {
        Err::Error(e) => ParseFailure::GrammarMismatch {
            stage,
            position: offset(line, e.input),
            expected: e.expected_or_default(),
        },
        Err::Failure(e) => ParseFailure::IncompleteField {
            stage,
            position: offset(line, e.input),
            expected: e.expected_or_default(),
        },
        Err::Incomplete(_) => ParseFailure::IncompleteField {
            stage,
            position: line.len(),
            expected: "more input",
        },
    })
}

/// Byte offset of `rest` within `line`; `rest` is always a suffix.
fn offset(line: &str, rest: &str) -> usize {
    line.len().saturating_sub(rest.len())
}
