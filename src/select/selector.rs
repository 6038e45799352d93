/// Streaming column selection over a buffered reader.
use std::collections::VecDeque;
use std::io::{self, BufRead};

use tracing::trace;

use super::columns::ColumnSet;
use super::errors::SelectError;
use super::line::{select_fields, split_line_endings};

/// The fields kept from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRow {
    /// 1-based line number in the input.
    pub line: usize,
    /// Kept `(index, value)` pairs, in field order.
    pub fields: Vec<(usize, String)>,
}

impl SelectedRow {
    /// Kept values concatenated with no separator.
    #[must_use]
    pub fn joined(&self) -> String {
        self.fields.iter().map(|(_, v)| v.as_str()).collect()
    }

    /// Value kept at `index`, if any.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.fields
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, v)| v.as_str())
    }
}

/// Iterator yielding one [`SelectedRow`] per input line.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Input is read in
/// `\n`-terminated chunks; a chunk holding several `\r`-terminated lines is
/// queued and drained one line per call. Stops after the first read error.
pub struct Selector<'a, R> {
    reader: R,
    columns: &'a ColumnSet,
    delimiter: char,
    buf: Vec<u8>,
    queued: VecDeque<String>,
    line: usize,
    done: bool,
}

impl<'a, R: BufRead> Selector<'a, R> {
    #[must_use]
    pub fn new(reader: R, columns: &'a ColumnSet, delimiter: char) -> Self {
        Self {
            reader,
            columns,
            delimiter,
            buf: Vec::new(),
            queued: VecDeque::new(),
            line: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Selector<'_, R> {
    type Item = Result<SelectedRow, SelectError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.queued.is_empty() {
            if self.done {
                return None;
            }
            if let Err(err) = self.fill() {
                self.done = true;
                return Some(Err(err));
            }
        }

        let text = self.queued.pop_front()?;
        self.line += 1;
        let fields = select_fields(&text, self.columns, self.delimiter);
        trace!(line = self.line, kept = fields.len(), "selected fields");
        Some(Ok(SelectedRow {
            line: self.line,
            fields,
        }))
    }
}

impl<R: BufRead> Selector<'_, R> {
    /// Read the next `\n`-terminated chunk and queue the lines it holds.
    fn fill(&mut self) -> Result<(), SelectError> {
        self.buf.clear();
        let failed_line = self.line + 1;
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| SelectError::Read {
                line: failed_line,
                source,
            })?;
        if read == 0 {
            self.done = true;
            return Ok(());
        }

        let text = std::str::from_utf8(&self.buf).map_err(|e| SelectError::Read {
            line: failed_line,
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        self.queued
            .extend(split_line_endings(text).into_iter().map(str::to_owned));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn rows(input: &str, columns: Vec<i64>) -> Vec<SelectedRow> {
        let cols = ColumnSet::new(columns);
        Selector::new(Cursor::new(input), &cols, ',')
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_one_row_per_line() {
        let out = rows("a,b,c\nd,e,f\ng,h,i\n", vec![1]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].line, 3);
        assert_eq!(out[2].joined(), "h");
    }

    #[test]
    fn test_last_line_without_newline() {
        let out = rows("a,b\nc,d", vec![0]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].joined(), "c");
    }

    #[test]
    fn test_joined_follows_field_order() {
        let out = rows("a,b,c\n", vec![2, 0]);
        assert_eq!(out[0].joined(), "ac");
        assert_eq!(out[0].value_at(2), Some("c"));
        assert_eq!(out[0].value_at(1), None);
    }

    #[test]
    fn test_no_columns_still_yields_rows() {
        let out = rows("a,b\nc,d\n", vec![]);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.fields.is_empty()));
    }

    #[test]
    fn test_carriage_return_ends_lines() {
        let out = rows("a,b\rc,d\r", vec![0]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].joined(), "a");
        assert_eq!(out[1].joined(), "c");
        assert_eq!(out[1].line, 2);
    }

    #[test]
    fn test_mixed_line_endings() {
        let out = rows("a,b\r\nc,d\re,f\n", vec![1]);
        let joined: Vec<String> = out.iter().map(SelectedRow::joined).collect();
        assert_eq!(joined, vec!["b", "d", "f"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(rows("", vec![0]).is_empty());
    }

    #[test]
    fn test_invalid_utf8_stops_with_read_error() {
        let cols = ColumnSet::new(vec![0]);
        let bytes: &[u8] = b"ok\n\xff\xfe\nafter\n";
        let results: Vec<_> = Selector::new(Cursor::new(bytes), &cols, ',').collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(SelectError::Read { line: 2, .. })));
    }
}
