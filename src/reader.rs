//! Streaming cave description reader.
//!
//! This module provides [`CaveReader`] for reading one cave description per
//! line from any source that implements [`std::io::BufRead`].
//!
//! # Examples
//!
//! Reading records from a file:
//!
//! ```no_run
//! use bretz::CaveReader;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("caves.txt")?;
//! let mut reader = CaveReader::new(BufReader::new(file));
//!
//! while let Some(record) = reader.read_record()? {
//!     println!("{} in {} County", record.name(), record.location.county);
//! }
//! for rejection in reader.rejections() {
//!     eprintln!("{rejection}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::BufRead;

use crate::assembler::parse_line;
use crate::batch::Rejection;
use crate::config::SurveyConstants;
use crate::error::{ParseFailure, Result};
use crate::formats::RecordReader;
use crate::record::CaveRecord;
use crate::recovery::{RecoveryContext, RecoveryMode};

/// Reader for line-oriented cave descriptions.
///
/// Blank lines are skipped. A rejected line is handled according to the
/// [`RecoveryMode`]: in lenient mode (the default) it is recorded and
/// reading continues with the next line; in strict mode it is returned as
/// [`CaveError::Rejected`](crate::CaveError::Rejected) and the reader is
/// exhausted.
#[derive(Debug)]
pub struct CaveReader<R: BufRead> {
    reader: R,
    constants: SurveyConstants,
    recovery: RecoveryContext,
    buffer: String,
    lines_read: usize,
    records_read: usize,
    halted: bool,
}

impl<R: BufRead> CaveReader<R> {
    /// Create a new reader with Missouri survey constants and lenient recovery.
    pub fn new(reader: R) -> Self {
        CaveReader {
            reader,
            constants: SurveyConstants::default(),
            recovery: RecoveryContext::new(RecoveryMode::default()),
            buffer: String::new(),
            lines_read: 0,
            records_read: 0,
            halted: false,
        }
    }

    /// Set the recovery mode for rejected lines.
    ///
    /// ```
    /// use bretz::{CaveReader, RecoveryMode};
    /// use std::io::Cursor;
    ///
    /// let reader = CaveReader::new(Cursor::new(""))
    ///     .with_recovery_mode(RecoveryMode::Strict);
    /// ```
    #[must_use]
    pub fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery.mode = mode;
        self
    }

    /// Set the survey constants attached to every record.
    #[must_use]
    pub fn with_constants(mut self, constants: SurveyConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Read the next accepted record.
    ///
    /// Returns `Ok(None)` at end of input, and after a strict-mode rejection.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read (including invalid
    /// UTF-8), or if a line is rejected in strict mode.
    pub fn read_record(&mut self) -> Result<Option<CaveRecord>> {
        if self.halted {
            return Ok(None);
        }
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.lines_read += 1;

            match parse_line(&self.buffer, &self.constants) {
                Ok(record) => {
                    self.records_read += 1;
                    tracing::debug!(line = self.lines_read, name = %record.name(), "parsed cave");
                    return Ok(Some(record));
                },
                Err(ParseFailure::EmptyInput) => {},
                Err(failure) => {
                    let rejection = Rejection {
                        line_number: self.lines_read,
                        text: self.buffer.trim().to_string(),
                        failure,
                    };
                    if let Err(err) = self.recovery.recover(rejection) {
                        self.halted = true;
                        return Err(err);
                    }
                },
            }
        }
    }

    /// Lines consumed so far, blank lines included.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Rejections collected so far in lenient mode.
    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.recovery.rejections
    }

    /// Consume the reader, returning the collected rejections.
    #[must_use]
    pub fn into_rejections(mut self) -> Vec<Rejection> {
        self.recovery.take_rejections()
    }
}

impl<R: BufRead + std::fmt::Debug> RecordReader for CaveReader<R> {
    fn read_record(&mut self) -> Result<Option<CaveRecord>> {
        CaveReader::read_record(self)
    }

    fn records_read(&self) -> Option<usize> {
        Some(self.records_read)
    }
}
