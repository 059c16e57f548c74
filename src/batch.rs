//! Line driver over a text blob.
//!
//! Each non-blank line is parsed independently. Accepted records and
//! rejected lines are collected into two sequences in input order; a bad
//! line never aborts the batch.
//!
//! # Examples
//!
//! ```no_run
//! use bretz::batch::parse_text;
//! use bretz::SurveyConstants;
//!
//! let text = std::fs::read_to_string("caves.txt")?;
//! let report = parse_text(&text, &SurveyConstants::default());
//! println!("{}", report.summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::assembler::parse_line;
use crate::config::{DriverConfig, SurveyConstants};
use crate::error::{CaveError, ParseFailure, Result as CaveResult};
use crate::recovery::RecoveryMode;
use crate::record::CaveRecord;

/// A line the grammar did not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based line number in the input
    pub line_number: usize,
    /// The trimmed line as written
    pub text: String,
    /// Why it was rejected
    pub failure: ParseFailure,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}\n    {}", self.line_number, self.failure, self.text)
    }
}

impl Serialize for Rejection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Rejection", 5)?;
        state.serialize_field("line", &self.line_number)?;
        state.serialize_field("stage", &self.failure.stage().map(|s| s.label()))?;
        state.serialize_field("position", &self.failure.position())?;
        state.serialize_field("reason", &self.failure.to_string())?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

/// Outcome of one batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Non-blank lines seen
    pub lines_processed: usize,
    /// Records in input order
    pub accepted: Vec<CaveRecord>,
    /// Rejected lines in input order
    pub rejected: Vec<Rejection>,
}

impl BatchReport {
    /// Summary of the batch for a human reader.
    #[must_use]
    pub fn summary(&self) -> BatchSummary<'_> {
        BatchSummary { report: self }
    }

    fn push(&mut self, line_number: usize, text: &str, outcome: Result<CaveRecord, ParseFailure>) {
        match outcome {
            Ok(record) => {
                tracing::debug!(line = line_number, name = %record.name(), "parsed cave");
                self.lines_processed += 1;
                self.accepted.push(record);
            },
            Err(ParseFailure::EmptyInput) => {},
            Err(failure) => {
                tracing::warn!(
                    line = line_number,
                    stage = failure.stage().map_or("none", |s| s.label()),
                    position = failure.position(),
                    "rejected cave description"
                );
                self.lines_processed += 1;
                self.rejected.push(Rejection {
                    line_number,
                    text: text.trim().to_string(),
                    failure,
                });
            },
        }
    }
}

/// Display adapter for [`BatchReport::summary`].
#[derive(Debug)]
pub struct BatchSummary<'a> {
    report: &'a BatchReport,
}

impl fmt::Display for BatchSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        write!(
            f,
            "{} lines processed: {} accepted, {} rejected",
            report.lines_processed,
            report.accepted.len(),
            report.rejected.len()
        )?;
        for rejection in &report.rejected {
            write!(f, "\n{rejection}")?;
        }
        Ok(())
    }
}

/// Parse every line of `text`.
#[must_use]
pub fn parse_text(text: &str, constants: &SurveyConstants) -> BatchReport {
    let mut report = BatchReport::default();
    for (idx, line) in text.lines().enumerate() {
        report.push(idx + 1, line, parse_line(line, constants));
    }
    tracing::info!(
        processed = report.lines_processed,
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "batch complete"
    );
    report
}

/// Parse every line of `text` on the rayon thread pool.
///
/// Lines are independent, so the result is identical to [`parse_text`],
/// including the order of both sequences.
#[must_use]
pub fn parse_text_parallel(text: &str, constants: &SurveyConstants) -> BatchReport {
    let lines: Vec<&str> = text.lines().collect();
    let outcomes: Vec<_> = lines
        .par_iter()
        .map(|line| parse_line(line, constants))
        .collect();

    let mut report = BatchReport::default();
    for (idx, (line, outcome)) in lines.iter().zip(outcomes).enumerate() {
        report.push(idx + 1, line, outcome);
    }
    tracing::info!(
        processed = report.lines_processed,
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "parallel batch complete"
    );
    report
}

/// Parse `text` as `config` directs.
///
/// # Errors
///
/// Returns [`CaveError::InvalidConfig`] for invalid constants, or
/// [`CaveError::Rejected`] with the first rejected line when the recovery
/// mode is [`RecoveryMode::Strict`].
pub fn parse_batch(text: &str, config: &DriverConfig) -> CaveResult<BatchReport> {
    config.validate()?;
    let mut report = if config.parallel {
        parse_text_parallel(text, &config.constants)
    } else {
        parse_text(text, &config.constants)
    };
    if config.recovery_mode == RecoveryMode::Strict && !report.rejected.is_empty() {
        let first = report.rejected.swap_remove(0);
        return Err(CaveError::Rejected(Box::new(first)));
    }
    Ok(report)
}
