//! Cave record structures.
//!
//! - [`CaveLocation`]: the structured fields the grammar extracts from one line
//! - [`CaveRecord`]: a location plus the original line and the survey constants
//! - [`CaveRecordBuilder`]: fluent construction, mostly for tests and tooling
//!
//! Records are created once per accepted line and are not modified afterwards.

use serde::Serialize;

use crate::config::SurveyConstants;
use crate::plss::{section_division, Aliquot, Quadrangle, Range, Sections, Township};

/// Structured fields extracted from one cave description line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaveLocation {
    /// Cave name, words joined by single spaces
    pub name: String,
    /// Aliquot parts in source order
    pub aliquot: Vec<Aliquot>,
    /// One or more section numbers
    pub section: Sections,
    /// Township designation
    pub township: Township,
    /// Range designation
    pub range: Range,
    /// County name without the `County` keyword
    pub county: String,
    /// Quadrangle map reference
    pub quadrangle: Quadrangle,
    /// Text after the quadrangle clause, words joined by single spaces
    pub description: String,
}

impl CaveLocation {
    /// Concatenated aliquot codes, e.g. `SENW`.
    #[must_use]
    pub fn section_division(&self) -> String {
        section_division(&self.aliquot)
    }

    /// Render the fields back into the book's line format.
    ///
    /// The result parses back to the same structured fields, though not
    /// necessarily to the same text as the original line.
    #[must_use]
    pub fn canonical_line(&self) -> String {
        let mut line = self.name.clone();
        for part in &self.aliquot {
            line.push(' ');
            line.push_str(part.code());
            line.push_str(part.fraction());
        }
        line.push_str(&format!(
            " sec. {}, {}, {}, {} County {}",
            self.section, self.township, self.range, self.county, self.quadrangle
        ));
        if !self.description.is_empty() {
            line.push(' ');
            line.push_str(&self.description);
        }
        line
    }
}

/// A parsed cave ready for export.
///
/// `description` is the original trimmed input line, kept verbatim so the
/// author's punctuation survives; the grammar's own tail text is in
/// `location.description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaveRecord {
    /// Structured fields
    pub location: CaveLocation,
    /// Original trimmed line
    pub description: String,
    /// Survey constants attached to the record
    pub constants: SurveyConstants,
}

impl CaveRecord {
    /// Package a parsed location into a record.
    #[must_use]
    pub fn new(location: CaveLocation, line: &str, constants: SurveyConstants) -> Self {
        CaveRecord {
            location,
            description: line.trim().to_string(),
            constants,
        }
    }

    /// Create a builder for fluently constructing records
    #[must_use]
    pub fn builder(name: impl Into<String>) -> CaveRecordBuilder {
        CaveRecordBuilder::new(name)
    }

    /// Cave name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.location.name
    }

    /// First section listed
    #[must_use]
    pub fn first_section(&self) -> u32 {
        self.location.section.first()
    }

    /// Concatenated aliquot codes
    #[must_use]
    pub fn section_division(&self) -> String {
        self.location.section_division()
    }

    /// See [`CaveLocation::canonical_line`].
    #[must_use]
    pub fn canonical_line(&self) -> String {
        self.location.canonical_line()
    }
}

/// Builder for [`CaveRecord`].
///
/// Unset fields default to section 1, township `T. 1 N.`, range `R. 1 W.`,
/// no county or quadrangle name, and a record not shown on its map. The
/// record's description defaults to its canonical line.
#[derive(Debug, Clone)]
pub struct CaveRecordBuilder {
    location: CaveLocation,
    description: Option<String>,
}

impl CaveRecordBuilder {
    /// Start a record for the named cave
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        use crate::plss::{RangeDirection, TownshipDirection};

        CaveRecordBuilder {
            location: CaveLocation {
                name: name.into(),
                aliquot: Vec::new(),
                section: Sections::new(1),
                township: Township {
                    number: 1,
                    direction: TownshipDirection::North,
                },
                range: Range {
                    number: 1,
                    direction: RangeDirection::West,
                },
                county: String::new(),
                quadrangle: Quadrangle {
                    is_on_map: false,
                    alias: None,
                    name: String::new(),
                },
                description: String::new(),
            },
            description: None,
        }
    }

    /// Append an aliquot part
    #[must_use]
    pub fn aliquot(mut self, part: Aliquot) -> Self {
        self.location.aliquot.push(part);
        self
    }

    /// Set the section numbers
    #[must_use]
    pub fn sections(mut self, sections: Sections) -> Self {
        self.location.section = sections;
        self
    }

    /// Set the township
    #[must_use]
    pub fn township(mut self, township: Township) -> Self {
        self.location.township = township;
        self
    }

    /// Set the range
    #[must_use]
    pub fn range(mut self, range: Range) -> Self {
        self.location.range = range;
        self
    }

    /// Set the county name
    #[must_use]
    pub fn county(mut self, county: impl Into<String>) -> Self {
        self.location.county = county.into();
        self
    }

    /// Set the quadrangle reference
    #[must_use]
    pub fn quadrangle(mut self, quadrangle: Quadrangle) -> Self {
        self.location.quadrangle = quadrangle;
        self
    }

    /// Set the description tail
    #[must_use]
    pub fn narrative(mut self, text: impl Into<String>) -> Self {
        self.location.description = text.into();
        self
    }

    /// Set the original line kept as the record description
    #[must_use]
    pub fn original_line(mut self, line: impl Into<String>) -> Self {
        self.description = Some(line.into());
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> CaveRecord {
        let description = self
            .description
            .unwrap_or_else(|| self.location.canonical_line());
        CaveRecord {
            location: self.location,
            description,
            constants: SurveyConstants::default(),
        }
    }
}
