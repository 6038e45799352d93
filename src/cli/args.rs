/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::select::DEFAULT_DELIMITER;

/// csvcol — print selected columns of a comma-delimited file.
#[derive(Debug, Parser)]
#[command(
    name = "csvcol",
    about = "Process CSV file: print selected columns by position",
    after_help = "with enough time and practice you will figure it out",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// CSV file to be parsed (`-` reads standard input).
    pub csv_file: PathBuf,

    /// Columns to select from CSV file (zero-based).
    #[arg(
        short = 'c',
        long = "column",
        value_name = "COLUMN",
        num_args = 1..,
        allow_negative_numbers = true
    )]
    pub column: Option<Vec<i64>>,

    /// Print logging messages to stderr (-vv for row-level tracing).
    /// Standard output is never affected.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Field delimiter. Quotes are not recognized.
    #[arg(short, long, value_name = "CHAR", default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long)]
    pub no_header: bool,

    /// Print stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// A blank line, then the selected values concatenated, per input line.
    #[default]
    Text,
    /// JSON array of rows (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one row per line).
    Ndjson,
    /// Aligned table with one column per selected index.
    Table,
}

impl OutputFormat {
    /// Whether errors should be reported as a JSON envelope.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::Compact | Self::Ndjson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns_after_file() {
        let cli = Cli::try_parse_from(["csvcol", "data.csv", "-c", "0", "2"]).unwrap();
        assert_eq!(cli.csv_file, PathBuf::from("data.csv"));
        assert_eq!(cli.column, Some(vec![0, 2]));
        assert_eq!(cli.delimiter, ',');
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_columns_optional() {
        let cli = Cli::try_parse_from(["csvcol", "data.csv"]).unwrap();
        assert!(cli.column.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_negative_column_accepted() {
        let cli = Cli::try_parse_from(["csvcol", "data.csv", "--column", "-1", "3"]).unwrap();
        assert_eq!(cli.column, Some(vec![-1, 3]));
    }

    #[test]
    fn test_non_integer_column_rejected() {
        assert!(Cli::try_parse_from(["csvcol", "data.csv", "-c", "x"]).is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(Cli::try_parse_from(["csvcol", "-c", "0"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["csvcol", "-vv", "data.csv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_json_conflicts_with_output() {
        let res = Cli::try_parse_from(["csvcol", "d.csv", "--json", "--output", "table"]);
        assert!(res.is_err());
    }
}
