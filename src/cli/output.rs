/// Output formatting: legacy text, JSON variants and table.
use std::io::{self, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::OutputFormat;
use crate::select::{ColumnSet, SelectedRow};
use crate::types::{ErrorOutput, RowOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to the row writer.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print stage timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Writes selected rows in the configured format.
///
/// `text` and `ndjson` stream each row as it arrives; the other formats need
/// the whole selection and render it in [`RowWriter::finish`].
pub struct RowWriter<'a, W: Write> {
    out: W,
    ctx: &'a OutputCtx,
    positions: Vec<usize>,
    pending: Vec<SelectedRow>,
}

impl<'a, W: Write> RowWriter<'a, W> {
    #[must_use]
    pub fn new(out: W, ctx: &'a OutputCtx, columns: &ColumnSet) -> Self {
        Self {
            out,
            ctx,
            positions: columns.positions(),
            pending: Vec::new(),
        }
    }

    /// Write or buffer one row.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the sink cannot be written.
    pub fn write_row(&mut self, row: SelectedRow) -> io::Result<()> {
        match self.ctx.format {
            // Each record is introduced by a newline; the last one is not terminated.
            OutputFormat::Text => write!(self.out, "\n{}", row.joined()),
            OutputFormat::Ndjson => {
                serde_json::to_writer(&mut self.out, &RowOutput::from(&row))?;
                writeln!(self.out)
            }
            OutputFormat::Json | OutputFormat::Compact | OutputFormat::Table => {
                self.pending.push(row);
                Ok(())
            }
        }
    }

    /// Render any buffered rows and flush. Returns the sink.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the sink cannot be written.
    pub fn finish(mut self) -> io::Result<W> {
        match self.ctx.format {
            OutputFormat::Json => {
                let rows = self.rows();
                write_json(&mut self.out, &rows, true)?;
            }
            OutputFormat::Compact => {
                let rows = self.rows();
                write_json(&mut self.out, &rows, false)?;
            }
            OutputFormat::Table => self.write_table()?,
            OutputFormat::Text | OutputFormat::Ndjson => {}
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn rows(&self) -> Vec<RowOutput> {
        self.pending.iter().map(RowOutput::from).collect()
    }

    fn write_table(&mut self) -> io::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);

        if !self.ctx.no_header {
            let mut headers = vec![Cell::new("LINE")];
            headers.extend(self.positions.iter().map(|p| Cell::new(format!("#{p}"))));
            table.set_header(headers);
        }

        for row in &self.pending {
            let mut cells = vec![Cell::new(row.line)];
            cells.extend(
                self.positions
                    .iter()
                    .map(|p| Cell::new(row.value_at(*p).unwrap_or(""))),
            );
            table.add_row(cells);
        }

        writeln!(self.out, "{table}")
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if format.is_json() {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
