//! JSON Lines export: one object per record, keyed by the CSV header names.

use std::io::Write;

use super::{ExportRow, RecordWriter};
use crate::error::Result;
use crate::record::CaveRecord;

/// Writes records as newline-delimited JSON objects.
#[derive(Debug)]
pub struct JsonLinesWriter<W: Write> {
    out: W,
    records_written: usize,
}

impl<W: Write> JsonLinesWriter<W> {
    /// Create a writer over `out`.
    pub fn new(out: W) -> Self {
        JsonLinesWriter {
            out,
            records_written: 0,
        }
    }

    /// Return the underlying destination without flushing.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + std::fmt::Debug> RecordWriter for JsonLinesWriter<W> {
    fn write_record(&mut self, record: &CaveRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, &ExportRow::from(record))?;
        self.out.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn records_written(&self) -> Option<usize> {
        Some(self.records_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plss::{Aliquot, Quadrangle};
    use serde_json::Value;

    #[test]
    fn test_one_object_per_line() {
        let records = vec![
            CaveRecord::builder("Alpha Cave")
                .aliquot(Aliquot::NortheastQuarter)
                .county("Pulaski")
                .original_line("Alpha Cave line")
                .build(),
            CaveRecord::builder("Beta Cave")
                .quadrangle(Quadrangle {
                    is_on_map: true,
                    alias: Some("Beta".to_string()),
                    name: "Rolla".to_string(),
                })
                .build(),
        ];
        let mut writer = JsonLinesWriter::new(Vec::new());
        writer.write_batch(&records).unwrap();
        writer.finish().unwrap();
        assert_eq!(writer.records_written(), Some(2));

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["Cave name"], "Alpha Cave");
        assert_eq!(lines[0]["Section Division"], "NE");
        assert_eq!(lines[0]["Alias"], "");
        assert_eq!(lines[0]["Description"], "Alpha Cave line");
        assert_eq!(lines[1]["On map"], "True");
        assert_eq!(lines[1]["Alias"], "Beta");
        assert_eq!(lines[1]["Principal Meridian Code"], 5);
    }

    #[test]
    fn test_empty_output() {
        let mut writer = JsonLinesWriter::new(Vec::new());
        writer.finish().unwrap();
        assert!(writer.into_inner().is_empty());
    }
}
