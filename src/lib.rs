#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! ## Modules
//!
//! - [`grammar`]: nom combinators for each field of a line
//! - [`assembler`]: the stages in fixed order, [`parse_line`]
//! - [`batch`]: line driver over a text blob, sequential or on rayon
//! - [`reader`]: streaming [`CaveReader`] with a [`RecoveryMode`]
//! - [`record`]: [`CaveRecord`], [`CaveLocation`] and the builder
//! - [`plss`]: aliquot parts, sections, township and range values
//! - [`formats`]: CSV and JSON Lines writers
//! - [`trs`]: TRS query strings for township geocoders
//! - [`config`]: survey constants and driver configuration
//! - [`error`]: error types and result type

pub mod assembler;
pub mod batch;
pub mod config;
pub mod error;
pub mod formats;
pub mod grammar;
pub mod plss;
pub mod reader;
pub mod record;
pub mod recovery;
pub mod trs;

pub use assembler::{parse_line, parse_location};
pub use batch::{parse_batch, parse_text, parse_text_parallel, BatchReport, Rejection};
pub use config::{DriverConfig, SurveyConstants};
pub use error::{CaveError, ParseFailure, Result, Stage};
pub use formats::{CsvRecordWriter, JsonLinesWriter, RecordReader, RecordWriter};
pub use plss::{Aliquot, Quadrangle, Range, RangeDirection, Sections, Township, TownshipDirection};
pub use reader::CaveReader;
pub use record::{CaveLocation, CaveRecord, CaveRecordBuilder};
pub use recovery::{RecoveryContext, RecoveryMode};
