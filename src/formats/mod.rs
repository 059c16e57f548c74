//! Export formats for cave records.
//!
//! | Format | Writer | Description |
//! |--------|--------|-------------|
//! | CSV | [`CsvRecordWriter`] | Seventeen-column table with a header row |
//! | JSON Lines | [`JsonLinesWriter`] | One JSON object per record |
//!
//! Both writers emit the same [`ExportRow`] shape, so the JSON keys are the
//! CSV header names.
//!
//! ```
//! use bretz::formats::{CsvRecordWriter, RecordWriter};
//! use bretz::{parse_text, SurveyConstants};
//!
//! let report = parse_text(
//!     "Lost Cave sec. 3, T. 36 N., R. 12 W., Pulaski County Shown on Richland Quadrangle map",
//!     &SurveyConstants::default(),
//! );
//! let mut buffer = Vec::new();
//! let mut writer = CsvRecordWriter::new(&mut buffer);
//! writer.write_batch(&report.accepted)?;
//! writer.finish()?;
//! assert_eq!(writer.records_written(), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod csv;
pub mod json;
mod traits;

pub use self::csv::{CsvRecordWriter, ExportRow, EXPORT_HEADER};
pub use self::json::JsonLinesWriter;
pub use traits::{RecordIterator, RecordReader, RecordReaderExt, RecordWriter};
