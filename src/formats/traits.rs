//! Record reader and writer traits.
//!
//! Readers yield accepted [`CaveRecord`]s one at a time; writers serialize
//! them to an export format. Both are object-safe.
//!
//! # Example
//!
//! ```
//! use bretz::formats::{RecordReader, RecordWriter};
//!
//! fn export<R: RecordReader, W: RecordWriter>(
//!     reader: &mut R,
//!     writer: &mut W,
//! ) -> bretz::Result<usize> {
//!     let mut count = 0;
//!     while let Some(record) = reader.read_record()? {
//!         writer.write_record(&record)?;
//!         count += 1;
//!     }
//!     writer.finish()?;
//!     Ok(count)
//! }
//! ```

use crate::error::Result;
use crate::record::CaveRecord;

/// A source of accepted cave records.
pub trait RecordReader: std::fmt::Debug {
    /// Read the next record, or `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or a line is rejected in strict mode.
    fn read_record(&mut self) -> Result<Option<CaveRecord>>;

    /// Read all remaining records.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`RecordReader::read_record`].
    fn read_all(&mut self) -> Result<Vec<CaveRecord>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Records read so far, if the reader tracks it.
    fn records_read(&self) -> Option<usize> {
        None
    }
}

/// A sink for cave records.
pub trait RecordWriter: std::fmt::Debug {
    /// Write a single record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the destination fails.
    fn write_record(&mut self, record: &CaveRecord) -> Result<()>;

    /// Write records in order.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`RecordWriter::write_record`].
    fn write_batch(&mut self, records: &[CaveRecord]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be flushed.
    fn finish(&mut self) -> Result<()>;

    /// Records written so far, if the writer tracks it.
    fn records_written(&self) -> Option<usize> {
        None
    }
}

/// Iterator adapter for any [`RecordReader`].
pub trait RecordReaderExt: RecordReader {
    /// Iterate over the remaining records.
    fn records(&mut self) -> RecordIterator<'_, Self>
    where
        Self: Sized,
    {
        RecordIterator { reader: self }
    }
}

impl<T: RecordReader> RecordReaderExt for T {}

/// Iterator returned by [`RecordReaderExt::records`].
#[derive(Debug)]
pub struct RecordIterator<'a, R: RecordReader> {
    reader: &'a mut R,
}

impl<R: RecordReader> Iterator for RecordIterator<'_, R> {
    type Item = Result<CaveRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockReader {
        records: Vec<CaveRecord>,
        index: usize,
    }

    impl RecordReader for MockReader {
        fn read_record(&mut self) -> Result<Option<CaveRecord>> {
            let record = self.records.get(self.index).cloned();
            if record.is_some() {
                self.index += 1;
            }
            Ok(record)
        }
    }

    #[derive(Debug, Default)]
    struct MockWriter {
        names: Vec<String>,
        finished: bool,
    }

    impl RecordWriter for MockWriter {
        fn write_record(&mut self, record: &CaveRecord) -> Result<()> {
            self.names.push(record.name().to_string());
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn mock_reader() -> MockReader {
        MockReader {
            records: vec![
                CaveRecord::builder("Alpha Cave").build(),
                CaveRecord::builder("Beta Cave").build(),
            ],
            index: 0,
        }
    }

    #[test]
    fn test_read_all() {
        let records = mock_reader().read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name(), "Beta Cave");
    }

    #[test]
    fn test_iterator_and_batch_write() {
        let mut reader = mock_reader();
        let records: Vec<_> = reader.records().collect::<Result<_>>().unwrap();
        let mut writer = MockWriter::default();
        writer.write_batch(&records).unwrap();
        writer.finish().unwrap();
        assert_eq!(writer.names, ["Alpha Cave", "Beta Cave"]);
        assert!(writer.finished);
        assert_eq!(writer.records_written(), None);
    }
}
