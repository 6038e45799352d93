/// Splitting a single input line into fields.
///
/// Quoting and escaping are not recognized: a quoted field containing the
/// delimiter is split like any other text.
use super::columns::ColumnSet;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Break `text` into lines ending at `\n`, `\r\n` or a lone `\r`.
///
/// Terminators stay attached to their line. A trailing unterminated line is kept.
#[must_use]
pub fn split_line_endings(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let ends = match b {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if ends {
            lines.push(&text[start..=i]);
            start = i + 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Trim surrounding whitespace (line terminator included) and split on `delimiter`.
///
/// An empty line yields a single empty field.
#[must_use]
pub fn split_line(line: &str, delimiter: char) -> Vec<&str> {
    line.trim().split(delimiter).collect()
}

/// Keep the fields of `line` whose index is in `columns`, left to right.
///
/// The result follows field position, not request order.
#[must_use]
pub fn select_fields(line: &str, columns: &ColumnSet, delimiter: char) -> Vec<(usize, String)> {
    split_line(line, delimiter)
        .into_iter()
        .enumerate()
        .filter(|(index, _)| columns.contains(*index))
        .map(|(index, value)| (index, value.to_owned()))
        .collect()
}
