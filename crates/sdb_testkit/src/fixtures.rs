//! Input file fixtures.
//!
//! Writes names/IDs and marks files into a temporary directory that lives
//! as long as the fixture.

use sdb_core::{ingest, Config, CoreResult, Record, Store};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A pair of input files with automatic cleanup.
pub struct InputFiles {
    names: PathBuf,
    marks: PathBuf,
    /// The temporary directory, removed on drop.
    temp_dir: TempDir,
}

impl InputFiles {
    /// Writes the given file contents verbatim.
    pub fn new(names: &str, marks: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let names_path = temp_dir.path().join("names.txt");
        let marks_path = temp_dir.path().join("marks.txt");

        fs::write(&names_path, names).expect("Failed to write names file");
        fs::write(&marks_path, marks).expect("Failed to write marks file");

        Self {
            names: names_path,
            marks: marks_path,
            temp_dir,
        }
    }

    /// Writes one row per record to each file.
    pub fn from_records(records: &[Record]) -> Self {
        let (names, marks) = render_records(records);
        Self::new(&names, &marks)
    }

    /// Path of the names/IDs file.
    pub fn names(&self) -> &Path {
        &self.names
    }

    /// Path of the marks file.
    pub fn marks(&self) -> &Path {
        &self.marks
    }

    /// A path inside the fixture directory that does not exist.
    pub fn missing(&self) -> PathBuf {
        self.temp_dir.path().join("missing.txt")
    }

    /// Loads the files with the default configuration.
    pub fn load(&self) -> CoreResult<Store> {
        ingest::load_store(&self.names, &self.marks, &Config::default())
    }
}

/// Renders records as the contents of a names/IDs file and a marks file.
pub fn render_records(records: &[Record]) -> (String, String) {
    let mut names = String::new();
    let mut marks = String::new();
    for record in records {
        let _ = writeln!(
            names,
            "{} {} {}",
            record.first_name(),
            record.last_name(),
            record.id()
        );
        let _ = writeln!(marks, "{}", record.score());
    }
    (names, marks)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Two students named Lee around one named Kim.
    pub fn lee_kim_lee() -> Vec<Record> {
        vec![
            Record::new("Ann", "Lee", 100, 90),
            Record::new("Bo", "Kim", 101, 75),
            Record::new("Cy", "Lee", 102, 88),
        ]
    }

    /// `count` records with ascending IDs and names, which degenerate both
    /// trees into lists.
    pub fn sorted(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| {
                let i = i32::try_from(i).expect("count fits in i32");
                Record::new(format!("F{i:06}"), format!("L{i:06}"), i, i % 101)
            })
            .collect()
    }
}
