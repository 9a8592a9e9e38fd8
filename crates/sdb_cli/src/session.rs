//! The interactive command loop.

use crate::command::{Command, HELP};
use crate::render::{self, Format};
use sdb_core::ingest::TokenReader;
use sdb_core::Store;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "sdb> ";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user entered `Q`.
    Quit,
    /// Input ran out.
    EndOfInput,
}

/// Reads commands from `input` and answers them on `out` until `Q` or end
/// of input.
pub struct Session<'a, R, W> {
    store: &'a Store,
    input: TokenReader<R>,
    out: W,
    format: Format,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session over a loaded store.
    pub fn new(store: &'a Store, input: R, out: W, format: Format) -> Self {
        Self {
            store,
            input: TokenReader::new(input),
            out,
            format,
        }
    }

    /// Runs commands until the user quits or input is exhausted.
    pub fn run(&mut self) -> io::Result<Exit> {
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let Some(word) = self.input.next_token()? else {
                writeln!(self.out)?;
                return Ok(Exit::EndOfInput);
            };

            let command = Command::parse(&word);
            tracing::debug!(%word, ?command, "command");
            if let Some(exit) = self.dispatch(command)? {
                return Ok(exit);
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Option<Exit>> {
        match command {
            Command::ListByName => {
                render::write_listing(
                    &mut self.out,
                    self.format,
                    "Student Record Database sorted by Last Name",
                    self.store.list_by_name(),
                )?;
            }
            Command::ListById => {
                render::write_listing(
                    &mut self.out,
                    self.format,
                    "Student Record Database sorted by Student ID",
                    self.store.list_by_id(),
                )?;
            }
            Command::FindByName => {
                write!(self.out, "Enter name to search: ")?;
                self.out.flush()?;
                let Some(name) = self.input.next_token()? else {
                    return Ok(Some(Exit::EndOfInput));
                };
                let found = self.store.find_by_name(&name);
                render::write_found(
                    &mut self.out,
                    self.format,
                    found.map(|r| &**r),
                    "There is no student with that name.",
                )?;
            }
            Command::FindById => {
                write!(self.out, "Enter ID to search: ")?;
                self.out.flush()?;
                match self.input.next_int()? {
                    None => return Ok(Some(Exit::EndOfInput)),
                    Some(Err(token)) => {
                        tracing::debug!(%token, "rejected ID");
                        writeln!(self.out, "Invalid ID.")?;
                    }
                    Some(Ok(id)) => {
                        let found = self.store.find_by_id(id);
                        render::write_found(
                            &mut self.out,
                            self.format,
                            found.map(|r| &**r),
                            "There is no student with that ID.",
                        )?;
                    }
                }
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {
                writeln!(self.out, "Program terminated...")?;
                return Ok(Some(Exit::Quit));
            }
            Command::Unknown => writeln!(self.out, "Command not understood.")?,
        }
        Ok(None)
    }
}
