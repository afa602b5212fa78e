use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use crate::domain::errors::{GenerateError, GenerateResult};

const QUOTE: u8 = b'"';

pub type CsvRow = Vec<String>;

#[derive(Debug, Clone, Copy)]
pub struct CsvRowReader {
    separator: u8,
    exclude_first_line: bool,
}

impl CsvRowReader {
    pub fn new(separator: char, exclude_first_line: bool) -> GenerateResult<Self> {
        if !separator.is_ascii() || matches!(separator, '"' | '\n' | '\r') {
            return Err(GenerateError::InvalidSeparator(separator));
        }

        Ok(Self {
            separator: separator as u8,
            exclude_first_line,
        })
    }

    pub fn read_path(&self, path: &Path) -> Result<Vec<CsvRow>> {
        let file = File::open(path)
            .with_context(|| format!("Unable to open CSV file: {}", path.display()))?;
        self.read_from(BufReader::new(file))
            .with_context(|| format!("Unable to read CSV file: {}", path.display()))
    }

    /// Blank lines come back as rows with no fields rather than being skipped,
    /// so a mapping that reads any field rejects them.
    pub fn read_from<R: BufRead>(&self, mut input: R) -> Result<Vec<CsvRow>> {
        if self.exclude_first_line {
            // Raw bytes up to the first newline, so even an unparsable line is dropped.
            let mut discarded = Vec::new();
            let skipped = input
                .read_until(b'\n', &mut discarded)
                .context("Unable to skip the first line")?;
            debug!(bytes = skipped, "skipped first input line");
        }

        let mut content = Vec::new();
        input
            .read_to_end(&mut content)
            .context("Unable to read CSV input")?;

        let mut rows = Vec::new();
        for (position, line) in split_lines(&content, self.separator).into_iter().enumerate() {
            if matches!(line, b"" | b"\r") {
                rows.push(CsvRow::new());
                continue;
            }

            let mut csv_reader = ReaderBuilder::new()
                .has_headers(false)
                .delimiter(self.separator)
                .flexible(true)
                .from_reader(line);
            for record in csv_reader.records() {
                let record = record
                    .with_context(|| format!("Malformed CSV record on line {}", position + 1))?;
                rows.push(record.iter().map(str::to_owned).collect());
            }
        }
        Ok(rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Splits input on newlines that end a record, leaving newlines inside quoted
/// fields alone. A trailing piece without a newline counts only if non-empty.
fn split_lines(content: &[u8], separator: u8) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut state = LineState::FieldStart;

    for (offset, &byte) in content.iter().enumerate() {
        state = match (state, byte) {
            (LineState::Quoted, QUOTE) => LineState::QuoteInQuoted,
            (LineState::Quoted, _) => LineState::Quoted,
            (LineState::FieldStart, QUOTE) | (LineState::QuoteInQuoted, QUOTE) => {
                LineState::Quoted
            }
            (_, b'\n') => {
                lines.push(&content[line_start..offset]);
                line_start = offset + 1;
                LineState::FieldStart
            }
            (_, byte) if byte == separator => LineState::FieldStart,
            _ => LineState::Unquoted,
        };
    }

    if line_start < content.len() {
        lines.push(&content[line_start..]);
    }
    lines
}
