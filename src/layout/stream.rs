//! Decoding of layout streams.
//!
//! A stream is either a JSON array of page records or JSON Lines with one
//! page record per line. Each record is decoded on its own so that a bad
//! record can be reported with its page index.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines, Read};
use std::path::Path;

use serde_json::Value;

use super::LayoutPage;
use crate::error::{Error, Result};

/// Streaming reader over JSON Lines layout output.
///
/// Blank lines are skipped and do not count as pages.
pub struct LayoutStream<R> {
    lines: Lines<R>,
    page: usize,
}

impl<R: BufRead> LayoutStream<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            page: 0,
        }
    }
}

impl<R: BufRead> Iterator for LayoutStream<R> {
    type Item = Result<LayoutPage>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    let page = self.page;
                    self.page += 1;
                    return Some(Err(Error::decoding(page, e.to_string())));
                }
                Err(e) => return Some(Err(e.into())),
            };
            if line.trim().is_empty() {
                continue;
            }

            let page = self.page;
            self.page += 1;
            let record = serde_json::from_str::<Value>(&line)
                .map_err(|e| Error::decoding(page, e.to_string()))
                .and_then(|value| decode_page(page, value));
            return Some(record);
        }
    }
}

/// Read a whole layout stream, auto-detecting array or JSON Lines form.
///
/// Text that is not valid UTF-8 is a decoding error, not an I/O error.
pub fn read_layout<R: Read>(mut reader: R) -> Result<Vec<LayoutPage>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let first = data.iter().find(|b| !b.is_ascii_whitespace());
    if first == Some(&b'[') {
        let records: Vec<Value> =
            serde_json::from_slice(&data).map_err(|e| Error::decoding(0, e.to_string()))?;
        records
            .into_iter()
            .enumerate()
            .map(|(page, value)| decode_page(page, value))
            .collect()
    } else {
        LayoutStream::new(data.as_slice()).collect()
    }
}

/// Read a layout stream from a file.
pub fn read_layout_file<P: AsRef<Path>>(path: P) -> Result<Vec<LayoutPage>> {
    let file = File::open(path)?;
    read_layout(BufReader::new(file))
}

fn decode_page(page: usize, value: Value) -> Result<LayoutPage> {
    let layout: LayoutPage =
        serde_json::from_value(value).map_err(|e| Error::decoding(page, e.to_string()))?;

    for line in layout.text_lines() {
        if let Some(run) = line.glyph_runs().find(|run| !run.size.is_finite()) {
            return Err(Error::decoding(
                page,
                format!("glyph run {:?} has non-finite size", run.text),
            ));
        }
    }

    Ok(layout)
}
