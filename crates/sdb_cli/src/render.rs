//! Output formatting for listings and lookups.

use clap::ValueEnum;
use sdb_core::Record;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Fixed-width columns and labelled fields.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serializable view of a record.
#[derive(Debug, Serialize)]
struct RecordView<'a> {
    first_name: &'a str,
    last_name: &'a str,
    id: i32,
    score: i32,
}

impl<'a> From<&'a Record> for RecordView<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            first_name: record.first_name(),
            last_name: record.last_name(),
            id: record.id(),
            score: record.score(),
        }
    }
}

/// Writes a full listing.
pub fn write_listing<'a, W, I>(
    out: &mut W,
    format: Format,
    title: &str,
    records: I,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Arc<Record>>,
{
    match format {
        Format::Text => {
            writeln!(out, "{title}")?;
            writeln!(out)?;
            for record in records {
                writeln!(
                    out,
                    "{:<20} {:<20} {:<5} {} ",
                    record.first_name(),
                    record.last_name(),
                    record.id(),
                    record.score()
                )?;
            }
            writeln!(out)
        }
        Format::Json => {
            let views: Vec<RecordView<'_>> =
                records.into_iter().map(|r| RecordView::from(&**r)).collect();
            write_json(out, &views)
        }
    }
}

/// Writes the result of a lookup. `missing` is printed when nothing matched.
pub fn write_found<W: Write>(
    out: &mut W,
    format: Format,
    found: Option<&Record>,
    missing: &str,
) -> io::Result<()> {
    match (format, found) {
        (Format::Text, None) => writeln!(out, "{missing}"),
        (Format::Text, Some(record)) => {
            let first = record.first_name();
            let last = record.last_name();
            // Long names already push past the first tab stop.
            let tabs = if first.len() + last.len() > 15 { "\t" } else { "\t\t" };
            writeln!(out)?;
            writeln!(out, "Student Name:{tabs}{first} {last}")?;
            writeln!(out, "Student ID:\t\t{}", record.id())?;
            writeln!(out, "Total Grade:\t\t{}", record.score())?;
            writeln!(out)
        }
        (Format::Json, found) => write_json(out, &found.map(RecordView::from)),
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_listing_columns() {
        let records = [Arc::new(Record::new("Ann", "Lee", 100, 90))];
        let text = render(|out| write_listing(out, Format::Text, "Title", &records));
        assert_eq!(
            text,
            format!("Title\n\n{:<20} {:<20} 100   90 \n\n", "Ann", "Lee")
        );
    }

    #[test]
    fn text_found_record() {
        let record = Record::new("Bo", "Kim", 101, 75);
        let text = render(|out| write_found(out, Format::Text, Some(&record), "none"));
        assert_eq!(
            text,
            "\nStudent Name:\t\tBo Kim\nStudent ID:\t\t101\nTotal Grade:\t\t75\n\n"
        );
    }

    #[test]
    fn long_names_use_one_tab() {
        let record = Record::new("Bartholomew", "Kimberly", 7, 1);
        let text = render(|out| write_found(out, Format::Text, Some(&record), "none"));
        assert!(text.contains("Student Name:\tBartholomew Kimberly\n"));
    }

    #[test]
    fn text_missing() {
        let text = render(|out| write_found(out, Format::Text, None, "nobody"));
        assert_eq!(text, "nobody\n");
    }

    #[test]
    fn json_output() {
        let record = Record::new("Bo", "Kim", 101, 75);
        let text = render(|out| write_found(out, Format::Json, Some(&record), "none"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["last_name"], "Kim");
        assert_eq!(value["id"], 101);

        let text = render(|out| write_found(out, Format::Json, None, "none"));
        assert_eq!(text.trim(), "null");

        let records = [Arc::new(record)];
        let text = render(|out| write_listing(out, Format::Json, "ignored", &records));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }
}
