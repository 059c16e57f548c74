//! Public Land Survey System values.
//!
//! Typed values for the structured parts of a cave location: aliquot parts
//! of a section, section numbers, township and range designations, and the
//! topographic quadrangle a cave is referenced to.

use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::{smallvec, SmallVec};

/// A quarter or half subdivision of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aliquot {
    /// Northeast quarter (`NE1/4`)
    NortheastQuarter,
    /// Southeast quarter (`SE1/4`)
    SoutheastQuarter,
    /// Southwest quarter (`SW1/4`)
    SouthwestQuarter,
    /// Northwest quarter (`NW1/4`)
    NorthwestQuarter,
    /// North half (`N1/2`)
    NorthHalf,
    /// South half (`S1/2`)
    SouthHalf,
    /// East half (`E1/2`)
    EastHalf,
    /// West half (`W1/2`)
    WestHalf,
}

impl Aliquot {
    /// All quarter subdivisions, in the order the grammar tries them.
    pub const QUARTERS: [Aliquot; 4] = [
        Self::NortheastQuarter,
        Self::SoutheastQuarter,
        Self::SouthwestQuarter,
        Self::NorthwestQuarter,
    ];

    /// All half subdivisions.
    pub const HALVES: [Aliquot; 4] = [
        Self::NorthHalf,
        Self::EastHalf,
        Self::SouthHalf,
        Self::WestHalf,
    ];

    /// Directional code without the fraction marker, e.g. `NE` or `S`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NortheastQuarter => "NE",
            Self::SoutheastQuarter => "SE",
            Self::SouthwestQuarter => "SW",
            Self::NorthwestQuarter => "NW",
            Self::NorthHalf => "N",
            Self::SouthHalf => "S",
            Self::EastHalf => "E",
            Self::WestHalf => "W",
        }
    }

    /// Fraction marker that follows the code in source text.
    #[must_use]
    pub const fn fraction(self) -> &'static str {
        if self.is_quarter() {
            "1/4"
        } else {
            "1/2"
        }
    }

    /// Whether this is a quarter (as opposed to half) subdivision.
    #[must_use]
    pub const fn is_quarter(self) -> bool {
        matches!(
            self,
            Self::NortheastQuarter
                | Self::SoutheastQuarter
                | Self::SouthwestQuarter
                | Self::NorthwestQuarter
        )
    }

    /// Look up a quarter subdivision by its two-letter code.
    #[must_use]
    pub fn quarter_from_code(code: &str) -> Option<Self> {
        Self::QUARTERS.into_iter().find(|q| q.code() == code)
    }

    /// Look up a half subdivision by its direction letter.
    #[must_use]
    pub fn half_from_letter(letter: char) -> Option<Self> {
        Self::HALVES.into_iter().find(|h| h.code().starts_with(letter))
    }
}

impl fmt::Display for Aliquot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Aliquot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Concatenate aliquot codes with no separator, e.g. `SENW`.
#[must_use]
pub fn section_division(parts: &[Aliquot]) -> String {
    parts.iter().map(|p| p.code()).collect()
}

/// One or more section numbers, in the order written.
///
/// Caves straddling a section line are written `sec. 15 or 22`; the first
/// number is the one used for a single-section reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sections(SmallVec<[u32; 2]>);

impl Sections {
    /// Start a section list with its first number.
    #[must_use]
    pub fn new(first: u32) -> Self {
        Sections(smallvec![first])
    }

    /// Build from a first number and any alternatives.
    #[must_use]
    pub fn with_alternatives(first: u32, rest: impl IntoIterator<Item = u32>) -> Self {
        let mut sections = Self::new(first);
        sections.0.extend(rest);
        sections
    }

    /// The first section written.
    #[must_use]
    pub fn first(&self) -> u32 {
        self.0[0]
    }

    /// All sections in source order. Never empty.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

}

impl fmt::Display for Sections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// North/south direction of a township from the base line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TownshipDirection {
    /// North of the base line
    North,
    /// South of the base line
    South,
}

impl TownshipDirection {
    /// Single-letter code.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }

    /// Parse the single-letter code.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            _ => None,
        }
    }
}

/// East/west direction of a range from the principal meridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeDirection {
    /// East of the meridian
    East,
    /// West of the meridian
    West,
}

impl RangeDirection {
    /// Single-letter code.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Parse the single-letter code.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}

macro_rules! letter_display_serialize {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.letter())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(
                    &self,
                    serializer: S,
                ) -> std::result::Result<S::Ok, S::Error> {
                    serializer.serialize_char(self.letter())
                }
            }
        )*
    };
}

letter_display_serialize!(TownshipDirection, RangeDirection);

/// Township designation, e.g. `T. 37 N.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Township {
    /// Township number
    pub number: u32,
    /// Direction from the base line
    pub direction: TownshipDirection,
}

/// Range designation, e.g. `R. 10 W.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    /// Range number
    pub number: u32,
    /// Direction from the principal meridian
    pub direction: RangeDirection,
}

impl fmt::Display for Township {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T. {} {}.", self.number, self.direction)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R. {} {}.", self.number, self.direction)
    }
}

/// Topographic quadrangle reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Quadrangle {
    /// Whether the cave is marked on the map sheet
    pub is_on_map: bool,
    /// Name the cave is marked under, only when an `as <alias>` clause appeared
    pub alias: Option<String>,
    /// Quadrangle sheet name
    pub name: String,
}

impl fmt::Display for Quadrangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_on_map { "Shown" } else { "Not shown" })?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        write!(f, " on {} Quadrangle map", self.name)
    }
}
