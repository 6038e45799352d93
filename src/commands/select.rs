/// `csvcol <csv_file> -c ...`: print the selected columns of every line.
use std::io::Write;

use tracing::{debug, info};

use crate::cli::{Cli, OutputCtx, RowWriter};
use crate::select::{ColumnSet, SelectError, Selector, open_input};

/// Run the column selection, writing rendered rows to `out`.
///
/// The input is opened before anything is written, so an unreadable file
/// leaves `out` untouched.
///
/// # Errors
///
/// Returns `SelectError` if the input cannot be opened or read, or if `out`
/// cannot be written.
pub fn run<W: Write>(args: &Cli, ctx: &OutputCtx, out: W) -> Result<(), SelectError> {
    let columns = ColumnSet::from(args.column.clone());
    if columns.is_empty() {
        debug!("no columns requested; every row will be empty");
    }

    let t_open = ctx.timer("open_input");
    let reader = open_input(&args.csv_file)?;
    drop(t_open);

    let _t_select = ctx.timer("select");
    let mut writer = RowWriter::new(out, ctx, &columns);
    let mut rows = 0usize;
    for row in Selector::new(reader, &columns, args.delimiter) {
        writer.write_row(row?)?;
        rows += 1;
    }
    writer.finish()?;

    info!(rows, columns = ?columns.requested(), "selection complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn run_with(argv: &[&str]) -> Result<String, SelectError> {
        let cli = Cli::try_parse_from(argv).unwrap();
        let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);
        let mut out = Vec::new();
        run(&cli, &ctx, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_selects_in_field_order() {
        let file = create_temp_csv("a,b,c\nd,e,f\n");
        let path = file.path().to_str().unwrap();

        let out = run_with(&["csvcol", path, "-c", "2", "0"]).unwrap();
        assert_eq!(out, "\nac\ndf");
    }

    #[test]
    fn test_out_of_range_column_prints_empty_groups() {
        let file = create_temp_csv("a,b,c\n");
        let path = file.path().to_str().unwrap();

        let out = run_with(&["csvcol", path, "-c", "5"]).unwrap();
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_missing_columns_flag_runs() {
        let file = create_temp_csv("a,b\nc,d\ne,f\n");
        let path = file.path().to_str().unwrap();

        let out = run_with(&["csvcol", path]).unwrap();
        assert_eq!(out, "\n\n\n");
    }

    #[test]
    fn test_missing_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.csv");

        let cli = Cli::try_parse_from(["csvcol", missing.to_str().unwrap(), "-c", "0"]).unwrap();
        let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);
        let mut out = Vec::new();
        let err = run(&cli, &ctx, &mut out).unwrap_err();

        assert!(matches!(err, SelectError::FileAccess { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_repeated_runs_identical() {
        let file = create_temp_csv("1,2,3\n4,5,6\n");
        let path = file.path().to_str().unwrap();

        let first = run_with(&["csvcol", path, "-c", "1"]).unwrap();
        let second = run_with(&["csvcol", path, "-c", "1"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_delimiter_and_ndjson() {
        let file = create_temp_csv("a|b\nc|d\n");
        let path = file.path().to_str().unwrap();

        let out = run_with(&["csvcol", path, "-d", "|", "-c", "1", "--output", "ndjson"]).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains(r#""joined":"d""#));
    }
}
