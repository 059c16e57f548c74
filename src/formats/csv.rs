//! CSV export of cave records.
//!
//! One row per record, seventeen columns, with a header row even when no
//! record was written:
//!
//! ```text
//! Cave name,Alias,On map,Quad,County,State,Principal Meridian Code,Township Number,...
//! ```

use std::io::Write;

use serde::Serialize;

use super::RecordWriter;
use crate::error::Result;
use crate::record::CaveRecord;

/// Column names in export order.
pub const EXPORT_HEADER: [&str; 17] = [
    "Cave name",
    "Alias",
    "On map",
    "Quad",
    "County",
    "State",
    "Principal Meridian Code",
    "Township Number",
    "Township Fraction",
    "Township Direction",
    "Range Number",
    "Range Fraction",
    "Range Direction",
    "Section",
    "Section Division",
    "Township Duplicate",
    "Description",
];

/// Flat export shape of a [`CaveRecord`].
///
/// `On map` is written as `True`/`False`, an absent alias as an empty cell,
/// `Section` is the first section listed and `Description` is the original
/// line.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'a> {
    #[serde(rename = "Cave name")]
    pub cave_name: &'a str,
    #[serde(rename = "Alias")]
    pub alias: &'a str,
    #[serde(rename = "On map")]
    pub on_map: &'static str,
    #[serde(rename = "Quad")]
    pub quad: &'a str,
    #[serde(rename = "County")]
    pub county: &'a str,
    #[serde(rename = "State")]
    pub state: &'a str,
    #[serde(rename = "Principal Meridian Code")]
    pub meridian: u8,
    #[serde(rename = "Township Number")]
    pub township_number: u32,
    #[serde(rename = "Township Fraction")]
    pub township_fraction: u8,
    #[serde(rename = "Township Direction")]
    pub township_direction: char,
    #[serde(rename = "Range Number")]
    pub range_number: u32,
    #[serde(rename = "Range Fraction")]
    pub range_fraction: u8,
    #[serde(rename = "Range Direction")]
    pub range_direction: char,
    #[serde(rename = "Section")]
    pub section: u32,
    #[serde(rename = "Section Division")]
    pub section_division: String,
    #[serde(rename = "Township Duplicate")]
    pub township_duplicate: u8,
    #[serde(rename = "Description")]
    pub description: &'a str,
}

impl<'a> From<&'a CaveRecord> for ExportRow<'a> {
    fn from(record: &'a CaveRecord) -> Self {
        let location = &record.location;
        let constants = &record.constants;
        ExportRow {
            cave_name: &location.name,
            alias: location.quadrangle.alias.as_deref().unwrap_or(""),
            on_map: if location.quadrangle.is_on_map {
                "True"
            } else {
                "False"
            },
            quad: &location.quadrangle.name,
            county: &location.county,
            state: &constants.state,
            meridian: constants.meridian,
            township_number: location.township.number,
            township_fraction: constants.township_fraction,
            township_direction: location.township.direction.letter(),
            range_number: location.range.number,
            range_fraction: constants.range_fraction,
            range_direction: location.range.direction.letter(),
            section: location.section.first(),
            section_division: location.section_division(),
            township_duplicate: constants.township_duplicate,
            description: &record.description,
        }
    }
}

/// Writes records as CSV rows.
///
/// The [`EXPORT_HEADER`] row is written exactly once, before the first record
/// or on the first [`finish`](RecordWriter::finish), whichever comes first.
#[derive(Debug)]
pub struct CsvRecordWriter<W: Write> {
    writer: ::csv::Writer<W>,
    records_written: usize,
    header_written: bool,
}

impl<W: Write> CsvRecordWriter<W> {
    /// Create a writer over `out`.
    pub fn new(out: W) -> Self {
        CsvRecordWriter {
            writer: ::csv::WriterBuilder::new().has_headers(false).from_writer(out),
            records_written: 0,
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(EXPORT_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write + std::fmt::Debug> CsvRecordWriter<W> {
    /// Flush and return the underlying destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn into_inner(mut self) -> Result<W> {
        self.finish()?;
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()).into())
    }
}

impl<W: Write + std::fmt::Debug> RecordWriter for CsvRecordWriter<W> {
    fn write_record(&mut self, record: &CaveRecord) -> Result<()> {
        self.write_header()?;
        self.writer.serialize(ExportRow::from(record))?;
        self.records_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.write_header()?;
        self.writer.flush()?;
        Ok(())
    }

    fn records_written(&self) -> Option<usize> {
        Some(self.records_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plss::{Aliquot, Quadrangle, Range, RangeDirection, Sections, Township, TownshipDirection};

    fn dry_hole() -> CaveRecord {
        CaveRecord::builder("Dry Hole")
            .aliquot(Aliquot::NorthHalf)
            .aliquot(Aliquot::SouthwestQuarter)
            .sections(Sections::with_alternatives(15, [22]))
            .township(Township {
                number: 36,
                direction: TownshipDirection::North,
            })
            .range(Range {
                number: 13,
                direction: RangeDirection::West,
            })
            .county("Phelps")
            .quadrangle(Quadrangle {
                is_on_map: true,
                alias: Some("Dry Cave".to_string()),
                name: "Rolla".to_string(),
            })
            .original_line("Dry Hole, as written")
            .build()
    }

    fn write_csv(records: &[CaveRecord]) -> String {
        let mut writer = CsvRecordWriter::new(Vec::new());
        writer.write_batch(records).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_export_row_fields() {
        let record = dry_hole();
        let row = ExportRow::from(&record);
        assert_eq!(row.alias, "Dry Cave");
        assert_eq!(row.on_map, "True");
        assert_eq!(row.section, 15);
        assert_eq!(row.section_division, "NSW");
        assert_eq!(row.township_direction, 'N');
        assert_eq!(row.range_direction, 'W');
        assert_eq!(row.description, "Dry Hole, as written");
    }

    #[test]
    fn test_csv_header_and_row() {
        let output = write_csv(&[dry_hole()]);
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some(EXPORT_HEADER.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some("Dry Hole,Dry Cave,True,Rolla,Phelps,MO,5,36,0,N,13,0,W,15,NSW,0,\"Dry Hole, as written\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_missing_alias_is_empty_cell() {
        let record = CaveRecord::builder("Plain Cave")
            .county("Pulaski")
            .original_line("Plain Cave")
            .build();
        let output = write_csv(&[record]);
        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with("Plain Cave,,False,,Pulaski,MO,5,1,0,N,1,0,W,1,,0,"));
    }

    #[test]
    fn test_header_written_without_records() {
        let output = write_csv(&[]);
        assert_eq!(output.trim_end(), EXPORT_HEADER.join(","));
    }

    #[test]
    fn test_finish_then_write_keeps_single_header() {
        let mut writer = CsvRecordWriter::new(Vec::new());
        writer.finish().unwrap();
        writer.write_record(&dry_hole()).unwrap();
        writer.finish().unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let header = EXPORT_HEADER.join(",");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], header);
        assert_eq!(lines.iter().filter(|line| **line == header).count(), 1);
        assert!(lines[1].starts_with("Dry Hole,Dry Cave,True,"));
    }

    #[test]
    fn test_records_written_count() {
        let mut writer = CsvRecordWriter::new(Vec::new());
        writer.write_record(&dry_hole()).unwrap();
        writer.write_record(&dry_hole()).unwrap();
        assert_eq!(writer.records_written(), Some(2));
    }
}
