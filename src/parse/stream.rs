use super::parser::parse_entry;
use crate::{Dictionary, Error, ErrorType, Source, SrcFile};
use log::{debug, info, warn};
use std::io::{BufRead, BufReader, Read};

/// What to do with a data line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Stop at the first bad line and return no dictionary.
    Abort,
    /// Record the error and continue with the next line.
    Skip,
}

/// How to treat empty or whitespace-only lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankLines {
    /// Hand them to the entry parser, which rejects them as malformed.
    Reject,
    /// Ignore them like comments.
    Skip,
}

/// Options of the dictionary [`Parser`]. The default aborts on the first bad
/// line, rejects blank lines, and does not classify glosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub on_error: OnError,
    pub blank_lines: BlankLines,
    /// Runs [`Entry::classified`](crate::Entry::classified) on every entry.
    pub classify: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            on_error: OnError::Abort,
            blank_lines: BlankLines::Reject,
            classify: false,
        }
    }
}

/// Reads a CC-CEDICT stream line by line into a [`Dictionary`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
    file: Option<SrcFile>,
}

impl Parser {
    pub fn new(options: Options) -> Self {
        Parser {
            options,
            file: None,
        }
    }

    /// Attaches a file name to the [`Source`] of reported errors.
    pub fn with_file(mut self, file: SrcFile) -> Self {
        self.file = Some(file);
        self
    }

    fn io_error(&self, io_error: std::io::Error, line: usize) -> Error {
        Error {
            msg: format!("Couldn't read input: {}", io_error),
            src: Source {
                file: self.file.clone(),
                line,
                col: 1,
            },
            r#type: ErrorType::Io,
            raw: String::new(),
        }
    }

    /// Stamps `error` with the line it came from, then either returns it
    /// or records it, depending on [`OnError`].
    fn reject(
        &self,
        mut error: Error,
        line_num: usize,
        errors: &mut Vec<Error>,
    ) -> Result<(), Error> {
        error.src.line = line_num;
        error.src.file = self.file.clone();
        error.msg = format!("Parsing line {}: {}", line_num, error.msg);
        match self.options.on_error {
            OnError::Abort => Err(error),
            OnError::Skip => {
                warn!("Skipped line {}: {}", line_num, error.msg);
                errors.push(error);
                Ok(())
            }
        }
    }

    /// Parses every line of `reader`, skipping lines starting with `#`.
    ///
    /// With [`OnError::Abort`] the first bad line is returned as the error and
    /// the returned list is always empty; with [`OnError::Skip`] bad lines are
    /// collected into the list instead. A line that is not valid UTF-8 counts
    /// as a bad line. Read failures are returned as [`ErrorType::Io`] errors
    /// in both modes.
    pub fn parse<R: Read>(&self, reader: R) -> Result<(Dictionary, Vec<Error>), Error> {
        let mut reader = BufReader::new(reader);
        let mut entries = Vec::new();
        let mut errors = Vec::new();
        let mut skipped = 0;
        let mut buf = Vec::new();
        let mut line_num = 0;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| self.io_error(e, line_num + 1))?;
            if read == 0 {
                break;
            }
            line_num += 1;
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            let mut text = match std::str::from_utf8(&buf) {
                Ok(text) => text,
                Err(utf8_error) => {
                    let valid = String::from_utf8_lossy(&buf[..utf8_error.valid_up_to()]);
                    let error = Error {
                        msg: format!("Invalid UTF-8: {}", utf8_error),
                        src: Source {
                            file: None,
                            line: 1,
                            col: valid.chars().count() + 1,
                        },
                        r#type: ErrorType::MalformedLine,
                        raw: String::from_utf8_lossy(&buf).into_owned(),
                    };
                    self.reject(error, line_num, &mut errors)?;
                    continue;
                }
            };
            if line_num == 1 {
                text = text.strip_prefix('\u{feff}').unwrap_or(text);
            }
            if text.starts_with('#')
                || (self.options.blank_lines == BlankLines::Skip && text.trim().is_empty())
            {
                skipped += 1;
                continue;
            }
            match parse_entry(text) {
                Ok(entry) if self.options.classify => entries.push(entry.classified()),
                Ok(entry) => entries.push(entry),
                Err(error) => self.reject(error, line_num, &mut errors)?,
            }
        }
        debug!("Skipped {} comment or blank lines.", skipped);
        info!(
            "Parsed {} entries, {} lines rejected.",
            entries.len(),
            errors.len()
        );
        Ok((Dictionary { entries }, errors))
    }
}

/// Parses a whole dictionary with the default [`Options`]. The first bad line
/// aborts the parse.
pub fn parse_dictionary<R: Read>(reader: R) -> Result<Dictionary, Error> {
    Parser::default().parse(reader).map(|(dict, _)| dict)
}
