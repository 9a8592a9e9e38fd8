//! Loading records from the paired names/IDs and marks sources.
//!
//! Both sources are streams of whitespace-separated tokens; line breaks carry
//! no meaning. A row of the names source is three tokens, `first last id`. A
//! row of the marks source is one token, the score. Rows are paired in
//! order, and reading stops as soon as either source runs out.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::record::Record;
use crate::store::Store;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads whitespace-separated tokens from a buffered source.
///
/// Input is pulled one line at a time, so on an interactive stream a token
/// is available as soon as its line is entered. Lines are split on ASCII
/// whitespace as raw bytes; bytes that are not valid UTF-8 become U+FFFD in
/// the token rather than failing the read.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.inner.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                self.line
                    .split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }

    /// Returns the next token parsed as an `i32`.
    ///
    /// `Ok(None)` at end of input. A token that is not an integer is
    /// consumed and returned as `Err(token)` inside `Ok(Some(..))`.
    pub fn next_int(&mut self) -> io::Result<Option<Result<i32, String>>> {
        Ok(self
            .next_token()?
            .map(|token| token.parse::<i32>().map_err(|_| token)))
    }
}

/// Reads records from the two sources, pairing rows until either runs out.
///
/// A partially read trailing row is dropped. A token that should be an
/// integer but is not ends the source it came from, with a warning.
pub fn read_records<N, S>(names: N, scores: S, config: &Config) -> CoreResult<Vec<Record>>
where
    N: BufRead,
    S: BufRead,
{
    let mut names = TokenReader::new(names);
    let mut scores = TokenReader::new(scores);
    let mut records = Vec::new();

    loop {
        let row = records.len() + 1;

        let Some(first) = names.next_token()? else { break };
        let Some(last) = names.next_token()? else { break };
        let id = match names.next_int()? {
            Some(Ok(id)) => id,
            Some(Err(token)) => {
                tracing::warn!(row, %token, "non-numeric ID, stopping");
                break;
            }
            None => break,
        };
        let score = match scores.next_int()? {
            Some(Ok(score)) => score,
            Some(Err(token)) => {
                tracing::warn!(row, %token, "non-numeric score, stopping");
                break;
            }
            None => break,
        };

        records.push(Record::bounded(first, last, id, score, config, row)?);
    }

    Ok(records)
}

/// Opens both files, reads every record and builds the store.
///
/// The names file is opened first; whichever file fails to open is named
/// in the returned [`CoreError::Open`].
pub fn load_store(
    names_path: impl AsRef<Path>,
    scores_path: impl AsRef<Path>,
    config: &Config,
) -> CoreResult<Store> {
    let names = open(names_path.as_ref())?;
    let scores = open(scores_path.as_ref())?;

    tracing::info!("building database");
    let records = read_records(names, scores, config)?;
    let store = Store::from_records(records);

    let stats = store.stats();
    tracing::info!(records = stats.records, "database built");
    tracing::debug!(
        name_depth = stats.name_depth,
        id_depth = stats.id_depth,
        "index shapes"
    );
    Ok(store)
}

fn open(path: &Path) -> CoreResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| CoreError::open(path, e))
}
