//! Error types for cave description parsing.
//!
//! This module provides the [`CaveError`] type for crate operations, the
//! per-line [`ParseFailure`] taxonomy, the [`Stage`] at which a line was
//! rejected, and the [`Result`] convenience type.

use std::fmt;

use thiserror::Error;

use crate::batch::Rejection;

/// Grammar stage of a cave description line.
///
/// Stages run strictly left to right in declaration order. A rejected line
/// reports the first stage that did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Free-text cave name before the first PLSS token
    Name,
    /// Quarter and half section subdivisions
    Aliquot,
    /// `Sec.` keyword and one or more section numbers
    Section,
    /// Comma between structured fields
    Separator,
    /// `T. <n> <N|S>.`
    Township,
    /// `R. <n> <E|W>.`
    Range,
    /// County name followed by `County`
    County,
    /// `Shown`/`Not shown` clause ending in `Quadrangle map`
    Quadrangle,
    /// Remaining free text
    Description,
}

impl Stage {
    /// Human-readable stage name used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "cave name",
            Self::Aliquot => "aliquot",
            Self::Section => "section",
            Self::Separator => "separator",
            Self::Township => "township",
            Self::Range => "range",
            Self::County => "county",
            Self::Quadrangle => "quadrangle",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single line did not produce a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The line was blank after trimming.
    #[error("empty input")]
    EmptyInput,

    /// A required literal, keyword, or digit run was absent.
    #[error("{stage} stage: expected {expected} at byte {position}")]
    GrammarMismatch {
        /// Stage that failed
        stage: Stage,
        /// Byte offset into the trimmed line
        position: usize,
        /// The token the grammar wanted
        expected: &'static str,
    },

    /// A field started matching but its mandatory trailing literal never appeared.
    #[error("{stage} stage: incomplete field, expected {expected} at byte {position}")]
    IncompleteField {
        /// Stage that failed
        stage: Stage,
        /// Byte offset into the trimmed line
        position: usize,
        /// The trailing literal the grammar wanted
        expected: &'static str,
    },
}

impl ParseFailure {
    /// The stage that failed, if the line was not blank.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::EmptyInput => None,
            Self::GrammarMismatch { stage, .. } | Self::IncompleteField { stage, .. } => {
                Some(*stage)
            },
        }
    }

    /// Byte offset of the failure, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::GrammarMismatch { position, .. } | Self::IncompleteField { position, .. } => {
                Some(*position)
            },
        }
    }
}

/// Error type for crate operations.
#[derive(Error, Debug)]
pub enum CaveError {
    /// A line was rejected while reading in strict mode.
    #[error("{0}")]
    Rejected(Box<Rejection>),

    /// Invalid driver or survey configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CaveError`].
pub type Result<T> = std::result::Result<T, CaveError>;
