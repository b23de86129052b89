//! CSV decoding and typed row extraction.

use std::borrow::Cow;
use std::path::Path;

use cerif_model::TableRow;
use csv::ReaderBuilder;
use encoding_rs::{Encoding, UTF_8};

use crate::error::{IngestError, Result};

/// How source files are decoded and split.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub encoding: &'static Encoding,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            encoding: UTF_8,
        }
    }
}

impl ReadOptions {
    pub fn with_delimiter(mut self, delimiter: &str) -> Result<Self> {
        let delimiter = match delimiter {
            "\\t" | "tab" => "\t",
            other => other,
        };
        match delimiter.as_bytes() {
            [byte] if byte.is_ascii() => {
                self.delimiter = *byte;
                Ok(self)
            }
            _ => Err(IngestError::InvalidDelimiter(delimiter.to_string())),
        }
    }

    /// Set the encoding from a WHATWG label (`utf-8`, `latin1`, `windows-1252`, ...).
    pub fn with_encoding_label(mut self, label: &str) -> Result<Self> {
        self.encoding =
            Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
                IngestError::UnknownEncoding {
                    label: label.to_string(),
                }
            })?;
        Ok(self)
    }
}

/// Decode file bytes, letting a byte order mark override the configured
/// encoding.
pub fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding, path: &Path) -> Cow<'a, str> {
    let (text, used, had_errors) = encoding.decode(bytes);
    if used != encoding {
        tracing::debug!(
            path = %path.display(),
            encoding = used.name(),
            "byte order mark overrides input encoding"
        );
    }
    if had_errors {
        tracing::warn!(
            path = %path.display(),
            encoding = used.name(),
            "malformed byte sequences replaced while decoding"
        );
    }
    text
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Read the data rows of a CSV file as trimmed optional cells.
///
/// The first record is the header and is skipped. Each returned row carries
/// its 1-based line number in the file.
pub fn read_cells(path: &Path, options: &ReadOptions) -> Result<Vec<(usize, Vec<Option<String>>)>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = decode(&bytes, options.encoding, path);

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let cells: Vec<Option<String>> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(Option::is_none) {
            continue;
        }
        let line = record
            .position()
            .map_or(rows.len() + 2, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));
        rows.push((line, cells));
    }
    Ok(rows)
}

/// Read a CSV file into typed rows.
///
/// Errors name the data row, the same numbering resolution gaps use.
pub fn read_table<R: TableRow>(path: &Path, options: &ReadOptions) -> Result<Vec<R>> {
    read_cells(path, options)?
        .into_iter()
        .enumerate()
        .map(|(idx, (line, cells))| {
            tracing::trace!(path = %path.display(), line, row = idx + 1, "read row");
            R::from_cells(&cells, idx + 1).map_err(|source| IngestError::Content {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}
